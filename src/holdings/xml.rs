//! A small namespace-aware element tree over `quick-xml`.
//!
//! Information tables are a few thousand flat records at most, so the whole
//! document is materialized and then queried by `(namespace, local name)`.

use crate::core::EdgarError;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    /// Resolved namespace URI; `None` when the element is unqualified.
    pub(crate) ns: Option<String>,
    pub(crate) name: String,
    pub(crate) text: String,
    pub(crate) children: Vec<Element>,
}

impl Element {
    fn new(ns: Option<String>, name: String) -> Self {
        Self {
            ns,
            name,
            ..Self::default()
        }
    }

    pub(crate) fn is(&self, ns: Option<&str>, local: &str) -> bool {
        self.name == local && self.ns.as_deref() == ns
    }

    /// First direct child with the given qualified name.
    pub(crate) fn child(&self, ns: Option<&str>, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(ns, local))
    }

    /// Text of the first direct child with the given qualified name.
    pub(crate) fn child_text(&self, ns: Option<&str>, local: &str) -> Option<&str> {
        self.child(ns, local).map(|c| c.text.as_str())
    }

    /// All descendants (not including `self`) with the given qualified name, in document order.
    pub(crate) fn descendants(&self, ns: Option<&str>, local: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(ns, local, &mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, ns: Option<&str>, local: &str, out: &mut Vec<&'a Element>) {
        for c in &self.children {
            if c.is(ns, local) {
                out.push(c);
            }
            c.collect_descendants(ns, local, out);
        }
    }
}

/// Parses `xml` into its root element.
///
/// Text is decoded with the encoding named in the XML declaration (UTF-8 when
/// none is declared). Byte sequences invalid in that encoding are errors.
pub(crate) fn parse_document(xml: &[u8]) -> Result<Element, EdgarError> {
    let mut reader = NsReader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = reader
            .read_resolved_event_into(&mut buf)
            .map_err(|e| EdgarError::Malformed(e.to_string()))?;
        let ns = namespace_of(&resolved);

        match event {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                stack.push(Element::new(ns, name));
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                attach(&mut stack, &mut root, Element::new(ns, name))?;
            }
            Event::End(_) => {
                let done = stack
                    .pop()
                    .ok_or_else(|| EdgarError::Malformed("unbalanced end tag".into()))?;
                attach(&mut stack, &mut root, done)?;
            }
            Event::Text(t) => {
                if let Some(top) = stack.last_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| EdgarError::Malformed(e.to_string()))?;
                    top.text.push_str(&text);
                }
            }
            Event::CData(c) => {
                if let Some(top) = stack.last_mut() {
                    let text = reader
                        .decoder()
                        .decode(&c)
                        .map_err(|e| EdgarError::Malformed(e.to_string()))?;
                    top.text.push_str(&text);
                }
            }
            // markup is scanned as bytes; a UTF-16 label here is a wrong declaration
            Event::Decl(_) if reader.decoder().encoding().name().starts_with("UTF-16") => {
                return Err(EdgarError::Malformed(
                    "declared UTF-16 encoding on byte-oriented input".into(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(EdgarError::Malformed(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| EdgarError::Malformed("document has no root element".into()))
}

fn namespace_of(resolved: &ResolveResult<'_>) -> Option<String> {
    match resolved {
        ResolveResult::Bound(Namespace(ns)) => Some(String::from_utf8_lossy(ns).into_owned()),
        _ => None,
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), EdgarError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err(EdgarError::Malformed("multiple root elements".into())),
    }
    Ok(())
}

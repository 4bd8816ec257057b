use crate::core::EdgarError;
use flate2::read::GzDecoder;
use std::io::Read;

/// The two-byte gzip member header.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns the body as-is, or gunzipped when it still carries the gzip signature.
///
/// reqwest already decodes bodies announced with `Content-Encoding: gzip`; this
/// catches payloads that arrive compressed without that header.
pub(crate) fn decode_body(body: &[u8]) -> Result<Vec<u8>, EdgarError> {
    if !body.starts_with(&GZIP_MAGIC) {
        return Ok(body.to_vec());
    }
    let mut out = Vec::with_capacity(body.len() * 4);
    GzDecoder::new(body)
        .read_to_end(&mut out)
        .map_err(EdgarError::Decode)?;
    Ok(out)
}

#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path, time::Duration};
use thirteenf_rs::{Backoff, Cik, EdgarClient, Pacing, RetryConfig, TrackedFund};
use url::Url;

pub const BERKSHIRE: &str = "1067983";
pub const BERKSHIRE_ACCESSION: &str = "0000950123-25-008343";
pub const SCION: &str = "1649339";
pub const SCION_ACCESSION: &str = "0001567619-25-012345";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Millisecond backoffs so retry paths run fast.
pub fn fast_retry() -> RetryConfig {
    RetryConfig {
        rate_limit_backoff: Backoff::Linear(Duration::from_millis(1)),
        error_backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    }
}

pub fn client_for(server: &MockServer) -> EdgarClient {
    EdgarClient::builder()
        .base_submissions(Url::parse(&server.url("/submissions/")).unwrap())
        .base_archives(Url::parse(&server.url("/Archives/edgar/data/")).unwrap())
        .retry_config(fast_retry())
        .pacing(Pacing::none())
        .build()
        .unwrap()
}

pub fn tracked(cik: &str, name: &str, group: &str) -> TrackedFund {
    TrackedFund {
        cik: cik.parse::<Cik>().unwrap(),
        name: name.to_string(),
        manager: format!("{name} manager"),
        group: group.to_string(),
        tag: "tag".into(),
        emoji: String::new(),
        strategy: "Value".into(),
        return_pct: None,
    }
}

pub fn filing_dir(cik: &str, accession: &str) -> String {
    format!("/Archives/edgar/data/{}/{}/", cik, accession.replace('-', ""))
}

pub fn mock_submissions<'a>(server: &'a MockServer, cik: &str, body: String) -> Mock<'a> {
    let path = format!("/submissions/CIK{cik:0>10}.json");
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_file<'a>(
    server: &'a MockServer,
    cik: &str,
    accession: &str,
    file: &str,
    status: u16,
    body: String,
) -> Mock<'a> {
    let path = format!("{}{}", filing_dir(cik, accession), file);
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status).body(body);
    })
}

/// Serves a complete Berkshire filing resolved through the index JSON.
pub fn mock_berkshire(server: &MockServer) -> Vec<Mock<'_>> {
    vec![
        mock_submissions(server, BERKSHIRE, fixture("submissions_1067983.json")),
        mock_file(
            server,
            BERKSHIRE,
            BERKSHIRE_ACCESSION,
            &format!("{BERKSHIRE_ACCESSION}-index.json"),
            200,
            fixture("index_1067983.json"),
        ),
        mock_file(
            server,
            BERKSHIRE,
            BERKSHIRE_ACCESSION,
            "46994.xml",
            200,
            fixture("infotable_1067983.xml"),
        ),
    ]
}

/// Serves a complete Scion filing resolved through the index page (no index JSON).
pub fn mock_scion(server: &MockServer) -> Vec<Mock<'_>> {
    vec![
        mock_submissions(server, SCION, fixture("submissions_1649339.json")),
        mock_file(
            server,
            SCION,
            SCION_ACCESSION,
            &format!("{SCION_ACCESSION}-index.htm"),
            200,
            fixture("index_1649339.htm"),
        ),
        mock_file(
            server,
            SCION,
            SCION_ACCESSION,
            "scion_q2.xml",
            200,
            fixture("infotable_1649339.xml"),
        ),
    ]
}

use crate::common;
use httpmock::Method::GET;
use thirteenf_rs::resolve::PROBE_FILENAMES;
use thirteenf_rs::{
    Cik, FilingReference, FormType, InfoTableResolver, ResolveStrategy, find_info_table,
};

const CIK: &str = "1234567";
const ACCESSION: &str = "0001234567-25-000042";

fn filing() -> FilingReference {
    FilingReference::new(
        CIK.parse::<Cik>().unwrap(),
        FormType::HoldingsReport,
        ACCESSION,
        "2025-06-30",
    )
}

fn dir_url(server: &httpmock::MockServer) -> String {
    server.url(common::filing_dir(CIK, ACCESSION))
}

#[tokio::test]
async fn index_json_hit_short_circuits() {
    let server = common::setup_server();
    let index = common::mock_file(
        &server,
        CIK,
        ACCESSION,
        &format!("{ACCESSION}-index.json"),
        200,
        r#"{"directory":{"item":[{"name":"primary_doc.xml"},{"name":"Form13fInfoTable.xml"}]}}"#
            .to_string(),
    );
    let page = common::mock_file(
        &server,
        CIK,
        ACCESSION,
        &format!("{ACCESSION}-index.htm"),
        200,
        String::new(),
    );

    let client = common::client_for(&server);
    let url = find_info_table(&client, &filing()).await.unwrap();

    index.assert();
    page.assert_hits(0);
    assert_eq!(url.as_str(), format!("{}Form13fInfoTable.xml", dir_url(&server)));
}

#[tokio::test]
async fn index_page_runs_when_index_json_fails() {
    let server = common::setup_server();
    let index = server.mock(|when, then| {
        when.method(GET)
            .path(format!("{}{ACCESSION}-index.json", common::filing_dir(CIK, ACCESSION)));
        then.status(500).body("oops");
    });
    let page = common::mock_file(
        &server,
        CIK,
        ACCESSION,
        &format!("{ACCESSION}-index.htm"),
        200,
        format!(
            r#"<table><tr><td>INFORMATION TABLE</td><td><a href="/Archives/edgar/data/{CIK}/x/q2_holdings.xml">q2_holdings.xml</a></td></tr>
               <tr><td></td><td><a href="primary_doc.xml">primary_doc.xml</a></td></tr></table>"#
        ),
    );

    let client = common::client_for(&server);
    let url = find_info_table(&client, &filing()).await.unwrap();

    index.assert_hits(1);
    page.assert();
    assert_eq!(url.as_str(), format!("{}q2_holdings.xml", dir_url(&server)));
}

#[tokio::test]
async fn index_page_runs_when_index_json_has_no_candidate() {
    let server = common::setup_server();
    common::mock_file(
        &server,
        CIK,
        ACCESSION,
        &format!("{ACCESSION}-index.json"),
        200,
        r#"{"directory":{"item":[{"name":"primary_doc.xml"},{"name":"filing.txt"}]}}"#.to_string(),
    );
    let page = common::mock_file(
        &server,
        CIK,
        ACCESSION,
        &format!("{ACCESSION}-index.htm"),
        200,
        r#"<a href="https://www.sec.gov/Archives/edgar/data/1234567/000123456725000042/InfoTable.xml">t</a>"#
            .to_string(),
    );

    let client = common::client_for(&server);
    let url = find_info_table(&client, &filing()).await.unwrap();
    page.assert();
    assert_eq!(
        url.as_str(),
        "https://www.sec.gov/Archives/edgar/data/1234567/000123456725000042/InfoTable.xml"
    );
}

#[tokio::test]
async fn probes_every_filename_before_giving_up() {
    let server = common::setup_server();
    // Both listings 404 (unmatched), so resolution falls through to probing.
    let probes: Vec<_> = PROBE_FILENAMES
        .iter()
        .map(|name| common::mock_file(&server, CIK, ACCESSION, name, 404, String::new()))
        .collect();

    let client = common::client_for(&server);
    assert!(find_info_table(&client, &filing()).await.is_none());

    for probe in &probes {
        probe.assert_hits(1);
    }
}

#[tokio::test]
async fn probe_stops_at_first_hit() {
    let server = common::setup_server();
    let first = common::mock_file(&server, CIK, ACCESSION, PROBE_FILENAMES[0], 404, String::new());
    let second = common::mock_file(&server, CIK, ACCESSION, PROBE_FILENAMES[1], 404, String::new());
    let third = common::mock_file(
        &server,
        CIK,
        ACCESSION,
        PROBE_FILENAMES[2],
        200,
        "<informationTable/>".to_string(),
    );
    let fourth = common::mock_file(&server, CIK, ACCESSION, PROBE_FILENAMES[3], 200, String::new());

    let client = common::client_for(&server);
    let url = find_info_table(&client, &filing()).await.unwrap();

    first.assert_hits(1);
    second.assert_hits(1);
    third.assert_hits(1);
    fourth.assert_hits(0);
    assert_eq!(url.as_str(), format!("{}{}", dir_url(&server), PROBE_FILENAMES[2]));
}

#[tokio::test]
async fn custom_strategy_order_is_respected() {
    let server = common::setup_server();
    let index = common::mock_file(
        &server,
        CIK,
        ACCESSION,
        &format!("{ACCESSION}-index.json"),
        200,
        r#"{"directory":{"item":[{"name":"infotable.xml"}]}}"#.to_string(),
    );
    let probe = common::mock_file(&server, CIK, ACCESSION, PROBE_FILENAMES[0], 200, String::new());

    let resolver = InfoTableResolver::new([ResolveStrategy::FilenameProbe, ResolveStrategy::IndexJson]);
    assert_eq!(resolver.strategies()[0], ResolveStrategy::FilenameProbe);

    let client = common::client_for(&server);
    let url = resolver.resolve(&client, &filing()).await.unwrap();

    probe.assert_hits(1);
    index.assert_hits(0);
    assert!(url.as_str().ends_with(PROBE_FILENAMES[0]));
}

use crate::common;
use flate2::{Compression, write::GzEncoder};
use httpmock::Method::GET;
use std::io::Write;
use url::Url;

#[tokio::test]
async fn gzip_body_without_content_encoding_is_inflated() {
    let server = common::setup_server();
    let xml = common::fixture("infotable_1649339.xml");

    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(xml.as_bytes()).unwrap();
    let gz = enc.finish().unwrap();
    assert_eq!(&gz[..2], &[0x1f, 0x8b]);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/table.xml");
        then.status(200)
            .header("content-type", "application/octet-stream")
            .body(gz);
    });

    let client = common::client_for(&server);
    let body = client
        .fetch(&Url::parse(&server.url("/table.xml")).unwrap())
        .await
        .unwrap();
    mock.assert();
    assert_eq!(String::from_utf8(body).unwrap(), xml);

    let positions = thirteenf_rs::parse_information_table(xml.as_bytes()).unwrap();
    assert_eq!(positions.len(), 3);
}

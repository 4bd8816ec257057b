use crate::common;
use thirteenf_rs::{AmountType, FundProcessor, InvestmentDiscretion, Truncation, process_fund};

#[tokio::test]
async fn berkshire_end_to_end_via_index_json() {
    let server = common::setup_server();
    let mocks = common::mock_berkshire(&server);

    let client = common::client_for(&server);
    let fund = common::tracked(common::BERKSHIRE, "Berkshire Hathaway", "B");
    let report = process_fund(&client, &fund).await;

    for m in &mocks {
        m.assert();
    }
    assert!(report.is_ok(), "unexpected error: {:?}", report.error);
    assert_eq!(report.fund, fund);
    assert_eq!(report.period, "2025-06-30");
    assert_eq!(report.position_count, 5);
    assert_eq!(report.total_value_usd, 150_000_000);

    let names: Vec<&str> = report
        .top_positions
        .iter()
        .map(|p| p.issuer_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "APPLE INC",
            "AMERICAN EXPRESS CO",
            "BANK AMER CORP",
            "CHEVRON CORP NEW",
            "LIBERTY MEDIA CORP DEL"
        ]
    );
    assert_eq!(report.top_positions, report.all_positions);

    let weights: Vec<f64> = report.all_positions.iter().map(|p| p.weight_pct).collect();
    assert_eq!(weights, [38.0, 32.0, 20.0, 6.67, 3.33]);
    let sum: f64 = weights.iter().sum();
    assert!((sum - 100.0).abs() < 0.05);

    let apple = &report.all_positions[0];
    assert_eq!(apple.cusip, "037833100");
    assert_eq!(apple.value_usd, 57_000_000);
    assert_eq!(apple.shares, 280_000_000);
    assert_eq!(apple.discretion, InvestmentDiscretion::Defined);

    let chevron = &report.all_positions[3];
    assert_eq!(chevron.class_title, "COM");
    assert_eq!(chevron.shares, 0);
    assert_eq!(chevron.amount_type, AmountType::Shares);
    assert_eq!(chevron.discretion, InvestmentDiscretion::Sole);

    let liberty = &report.all_positions[4];
    assert_eq!(liberty.cusip, "");
    assert_eq!(liberty.amount_type, AmountType::Principal);
}

#[tokio::test]
async fn scion_amendment_via_index_page() {
    let server = common::setup_server();
    let mocks = common::mock_scion(&server);

    let client = common::client_for(&server);
    let report = process_fund(&client, &common::tracked(common::SCION, "Scion", "B")).await;

    for m in &mocks {
        m.assert();
    }
    assert!(report.is_ok(), "unexpected error: {:?}", report.error);
    assert_eq!(report.period, "2025-06-30");
    assert_eq!(report.total_value_usd, 5_000_000);
    let names: Vec<&str> = report
        .all_positions
        .iter()
        .map(|p| p.issuer_name.as_str())
        .collect();
    assert_eq!(names, ["ESTEE LAUDER COS INC", "Apple Inc", "BANK AMER CORP"]);
    assert_eq!(report.all_positions[0].class_title, "CL A");
    assert_eq!(report.all_positions[0].weight_pct, 60.0);
}

#[tokio::test]
async fn condensed_group_keeps_fewer_top_positions() {
    let server = common::setup_server();
    common::mock_berkshire(&server);
    let client = common::client_for(&server);

    let truncation = Truncation {
        top: 4,
        top_condensed: 2,
        condensed_group: "C".into(),
        cross_fund: 3,
    };
    let processor = FundProcessor::new(&client).truncation(truncation);

    let normal = processor
        .process(&common::tracked(common::BERKSHIRE, "Berkshire", "A"))
        .await;
    assert_eq!(normal.top_positions.len(), 4);
    assert_eq!(normal.all_positions.len(), 3);
    assert_eq!(normal.position_count, 5);
    assert_eq!(normal.total_value_usd, 150_000_000);

    let condensed = processor
        .process(&common::tracked(common::BERKSHIRE, "Berkshire", "C"))
        .await;
    assert_eq!(condensed.top_positions.len(), 2);
    assert_eq!(condensed.all_positions.len(), 3);
}

#[tokio::test]
async fn repeated_runs_differ_only_in_fetch_time() {
    let server = common::setup_server();
    common::mock_berkshire(&server);
    let client = common::client_for(&server);
    let fund = common::tracked(common::BERKSHIRE, "Berkshire", "B");

    let mut first = process_fund(&client, &fund).await;
    let second = process_fund(&client, &fund).await;
    first.fetched_at = second.fetched_at;
    assert_eq!(first, second);
}

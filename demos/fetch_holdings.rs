//! Fetches the latest 13F holdings for every fund in a registry file and writes
//! the aggregate report as JSON.
//!
//! ```text
//! EDGAR_USER_AGENT="Your Name you@example.com" \
//!   cargo run --example fetch_holdings --features tracing-subscriber -- demos/funds.json data/holdings.json
//! ```

use std::path::PathBuf;
use thirteenf_rs::{EdgarClient, Registry, collect};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("thirteenf_rs=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let registry_path = args.next().unwrap_or_else(|| "demos/funds.json".to_string());
    let out_path = PathBuf::from(args.next().unwrap_or_else(|| "data/holdings.json".to_string()));

    let registry = Registry::from_path(&registry_path)?;
    let mut builder = EdgarClient::builder();
    if let Ok(ua) = std::env::var("EDGAR_USER_AGENT") {
        builder = builder.user_agent(ua);
    }
    let client = builder.build()?;

    println!("Tracking {} funds from {registry_path}", registry.len());
    let report = collect(&client, &registry).await;
    println!(
        "Found {} securities held by 2+ funds",
        report.cross_fund_overlap.len()
    );

    if let Some(dir) = out_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(&out_path, serde_json::to_string_pretty(&report)?)?;
    println!("Saved to {}", out_path.display());

    print!("{}", report.summary());
    Ok(())
}

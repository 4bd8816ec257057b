//! thirteenf-rs: SEC EDGAR Form 13F holdings client.
//!
//! Locates each tracked fund's latest 13F filing, resolves the information-table
//! XML inside it, parses the positions (tolerating the namespace variants filers
//! have used over the years) and aggregates securities shared across funds.
//!
//! ```no_run
//! use thirteenf_rs::{EdgarClient, fund::Registry, report};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EdgarClient::builder()
//!     .user_agent("Example Research ops@example.com")
//!     .build()?;
//! let registry = Registry::from_path("funds.json")?;
//! let holdings = report::collect(&client, &registry).await;
//! print!("{}", holdings.summary());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod filing;
pub mod fund;
pub mod holdings;
pub mod overlap;
pub mod report;
pub mod resolve;

pub use crate::core::{Backoff, EdgarClient, EdgarClientBuilder, EdgarError, Pacing, RetryConfig};
pub use filing::{Cik, FilingReference, FormType, latest_filing};
pub use fund::{FundProcessor, FundReport, Registry, TrackedFund, Truncation, process_fund};
pub use holdings::{AmountType, InvestmentDiscretion, Position, parse_information_table};
pub use overlap::{FundHolding, OverlapRecord, cross_fund_overlap};
pub use report::{HoldingsReport, RunSummary, collect};
pub use resolve::{InfoTableResolver, ResolveStrategy, find_info_table};

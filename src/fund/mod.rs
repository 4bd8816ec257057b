//! Tracked funds and the per-fund pipeline.

mod model;
mod process;
mod registry;

pub use model::FundReport;
pub use process::{FundProcessor, Truncation, process_fund};
pub use registry::{Registry, TrackedFund};

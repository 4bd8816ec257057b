//! Core components of the `thirteenf-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EdgarClient`] and its builder.
//! - The primary [`EdgarError`] type.
//! - Internal body decoding.

/// The main client (`EdgarClient`), builder, and configuration.
pub mod client;
/// The primary error type (`EdgarError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::EdgarClient`
pub use client::{Backoff, EdgarClient, EdgarClientBuilder, Pacing, RetryConfig};
pub use error::EdgarError;

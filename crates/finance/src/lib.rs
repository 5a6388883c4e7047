//! Client for the remote finance question-answering flow.
//!
//! The flow runs on an inference service that exposes a run endpoint
//! (`POST <endpoint>/api/v1/run/<run_id>?stream=false`). This crate builds
//! the run request, decodes the nested response envelope, and classifies
//! failures.
//!
//! # Example
//!
//! ```no_run
//! use finance::{FinanceClient, FinanceConfig};
//!
//! # async fn example() -> finance::Result<()> {
//! let client = FinanceClient::new(&FinanceConfig::default())?;
//! let answer = client.query("My balance").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::FinanceClient;
pub use config::{
    DEFAULT_ENDPOINT_URL, DEFAULT_RUN_ID, DEFAULT_TIMEOUT_MS, DEFAULT_TWEAKS, FinanceConfig,
};
pub use error::{Error, Result};
pub use types::{RunRequest, RunResponse, error_detail};

//! MCP tool adapter for the finance question-answering flow.
//!
//! This crate exposes a single tool, `query_finance`, that forwards a
//! natural-language query to the finance flow and returns its answer as
//! text content.
//!
//! # Example
//!
//! ```no_run
//! use finance::{FinanceClient, FinanceConfig};
//! use mcp::{FinanceTool, StatementQaServer};
//! use rmcp::ServiceExt;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let client = FinanceClient::new(&FinanceConfig::default())?;
//! let server = StatementQaServer::new(FinanceTool::new(client));
//!
//! let service = server.serve(rmcp::transport::stdio()).await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod server;
mod tool;

pub use error::{Result, ToolError};
pub use server::{SERVER_NAME, StatementQaServer};
pub use tool::{FinanceTool, TOOL_DESCRIPTION, TOOL_NAME};

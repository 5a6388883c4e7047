//! The `query_finance` tool.

use std::sync::Arc;

use finance::FinanceClient;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;

use crate::error::{Result, ToolError};

pub const TOOL_NAME: &str = "query_finance";
pub const TOOL_DESCRIPTION: &str = "Query personal finance information using a keyword";

/// Tool core: descriptor, argument validation and the remote call.
///
/// Independent of any transport, so it can be driven directly in tests.
#[derive(Debug, Clone)]
pub struct FinanceTool {
    client: FinanceClient,
}

impl FinanceTool {
    pub fn new(client: FinanceClient) -> Self {
        Self { client }
    }

    /// The tool descriptor advertised to hosts.
    pub fn descriptor() -> Tool {
        Tool::new(TOOL_NAME, TOOL_DESCRIPTION, Arc::new(input_schema()))
    }

    /// All tools exposed by this adapter.
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![Self::descriptor()]
    }

    /// Validate a call and run the query against the finance flow.
    pub async fn call(&self, name: &str, arguments: Option<&JsonObject>) -> Result<String> {
        if name != TOOL_NAME {
            return Err(ToolError::UnknownTool(name.to_string()));
        }
        let query = query_argument(arguments)?;

        tracing::debug!(query_len = query.len(), "querying finance flow");
        Ok(self.client.query(query).await?)
    }
}

fn input_schema() -> JsonObject {
    rmcp::object!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "The search query keyword (e.g., \"My balance\", \"credit card\", etc.)"
            }
        },
        "required": ["query"]
    })
}

/// Extract a non-empty `query` string.
fn query_argument(arguments: Option<&JsonObject>) -> Result<&str> {
    arguments
        .and_then(|args| args.get("query"))
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .ok_or(ToolError::InvalidQuery)
}

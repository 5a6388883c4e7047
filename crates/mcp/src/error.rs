//! Tool adapter error types and their protocol mapping.

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Query parameter is required and must be a string")]
    InvalidQuery,

    #[error(transparent)]
    Finance(#[from] finance::Error),
}

impl From<ToolError> for ErrorData {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::UnknownTool(_) => ErrorData::new(ErrorCode::METHOD_NOT_FOUND, message, None),
            ToolError::InvalidQuery => ErrorData::new(ErrorCode::INVALID_PARAMS, message, None),
            ToolError::Finance(e) => ErrorData::new(
                ErrorCode::INTERNAL_ERROR,
                message,
                Some(json!({ "kind": e.kind() })),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

//! MCP server handler exposing the finance tool.

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};

use crate::tool::FinanceTool;

pub const SERVER_NAME: &str = "statement-qa-tool";

/// Protocol-facing wrapper around [`FinanceTool`].
///
/// Construction is pure; binding to a transport is left to the caller
/// (`rmcp::ServiceExt::serve`).
#[derive(Debug, Clone)]
pub struct StatementQaServer {
    tool: FinanceTool,
}

impl StatementQaServer {
    pub fn new(tool: FinanceTool) -> Self {
        Self { tool }
    }
}

impl ServerHandler for StatementQaServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions =
            Some("Answers personal finance questions from the user's statements.".to_string());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tool.list_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let name: &str = &request.name;
        match self.tool.call(name, request.arguments.as_ref()).await {
            Ok(text) => {
                tracing::info!(tool = name, "tool call succeeded");
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                Err(e.into())
            }
        }
    }
}

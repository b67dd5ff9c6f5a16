use crate::protocol::ToolResult;

/// Health check: static confirmation string.
pub async fn handle() -> ToolResult {
    ToolResult::text("Pong! The to-do MCP server is up.")
}

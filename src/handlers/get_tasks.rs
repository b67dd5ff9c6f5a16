use crate::protocol::ToolResult;
use crate::store::TodoStore;

/// Handle a `getTasks` tool call.
///
/// Always succeeds: an unreachable store reads as zero tasks, the same
/// degradation the page renderer gets.
pub async fn handle(store: &TodoStore) -> ToolResult {
    let todos = store.list();
    ToolResult::json(&serde_json::json!({
        "success": true,
        "count": todos.len(),
        "todos": todos,
    }))
}

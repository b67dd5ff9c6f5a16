use crate::protocol::{DeleteTaskParams, ToolResult};
use crate::store::TodoStore;

/// Handle a `deleteTask` tool call.
///
/// A nonexistent id still reports success; the store treats it as a no-op.
pub async fn handle(params: DeleteTaskParams, store: &TodoStore) -> ToolResult {
    match store.delete(params.id) {
        Ok(()) => ToolResult::json(&serde_json::json!({
            "success": true,
            "message": format!("Task #{} deleted successfully", params.id),
        })),
        Err(e) => ToolResult::error_json(e.to_string()),
    }
}

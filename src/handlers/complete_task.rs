use crate::protocol::{CompleteTaskParams, ToolResult};
use crate::store::TodoStore;

/// Handle a `completeTask` tool call.
///
/// A nonexistent id still reports success; the store treats it as a no-op.
pub async fn handle(params: CompleteTaskParams, store: &TodoStore) -> ToolResult {
    match store.mark_complete(params.id) {
        Ok(()) => ToolResult::json(&serde_json::json!({
            "success": true,
            "message": format!("Task #{} marked as completed", params.id),
        })),
        Err(e) => ToolResult::error_json(e.to_string()),
    }
}

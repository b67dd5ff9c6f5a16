use crate::protocol::{AddTaskParams, ToolResult};
use crate::store::TodoStore;

/// Handle an `addTask` tool call.
///
/// Title validation (trim, non-empty) lives in the store; a rejected title or
/// a failed write both surface as an in-band `{"success":false,…}` result.
pub async fn handle(params: AddTaskParams, store: &TodoStore) -> ToolResult {
    let title = params.title.trim();
    match store.insert(title) {
        Ok(()) => ToolResult::json(&serde_json::json!({
            "success": true,
            "message": format!("Task \"{title}\" added successfully"),
        })),
        Err(e) => ToolResult::error_json(e.to_string()),
    }
}

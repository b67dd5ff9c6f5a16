pub mod add_task;
pub mod complete_task;
pub mod delete_task;
pub mod get_tasks;
pub mod ping;

use serde_json::Value;

use crate::protocol::{
    AddTaskParams, CompleteTaskParams, DeleteTaskParams, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ToolCallParams, ToolResult,
};
use crate::registry;
use crate::store::TodoStore;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Protocol faults (unknown method or tool) become JSON-RPC `error` objects;
/// tool-level failures become a successful response whose `ToolResult` sets
/// `isError`. Every request produces a response.
pub async fn dispatch(req: &JsonRpcRequest, store: &TodoStore) -> JsonRpcResponse {
    match req.method.as_str() {
        "tools/list" => {
            let result = serde_json::json!({ "tools": registry::descriptors() });
            JsonRpcResponse::success(&req.jsonrpc, req.id.clone(), result)
        }

        "tools/call" => {
            let params = req.params.clone().unwrap_or_else(empty_object);
            let call: ToolCallParams = match serde_json::from_value(params) {
                Ok(c) => c,
                Err(_) => {
                    return JsonRpcResponse::error(
                        &req.jsonrpc,
                        req.id.clone(),
                        JsonRpcError::method_not_found(""),
                    );
                }
            };

            let Some(tool) = registry::find(&call.name) else {
                return JsonRpcResponse::error(
                    &req.jsonrpc,
                    req.id.clone(),
                    JsonRpcError::method_not_found(&call.name),
                );
            };

            let args = call.arguments.unwrap_or_else(empty_object);
            if let Err(detail) = tool.check_args(&args) {
                let result = ToolResult::error_json(format!(
                    "Invalid arguments for {}: {detail}",
                    tool.name
                ));
                return wrap_tool_result(req, result);
            }

            match call_tool(tool.name, args, store).await {
                Some(result) => wrap_tool_result(req, result),
                None => JsonRpcResponse::error(
                    &req.jsonrpc,
                    req.id.clone(),
                    JsonRpcError::internal_error("Internal error"),
                ),
            }
        }

        _ => JsonRpcResponse::error(
            &req.jsonrpc,
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        ),
    }
}

/// Invoke a registered tool. Returns `None` only if the registry advertises a
/// name this table does not handle, which the dispatcher maps to -32603.
async fn call_tool(name: &str, args: Value, store: &TodoStore) -> Option<ToolResult> {
    match name {
        "ping" => Some(ping::handle().await),

        "getTasks" => Some(get_tasks::handle(store).await),

        "addTask" => {
            let params: AddTaskParams = match serde_json::from_value(args) {
                Ok(p) => p,
                Err(e) => {
                    return Some(ToolResult::error_json(format!(
                        "Invalid arguments for addTask: {e}"
                    )));
                }
            };
            Some(add_task::handle(params, store).await)
        }

        "completeTask" => {
            let params: CompleteTaskParams = match serde_json::from_value(args) {
                Ok(p) => p,
                Err(e) => {
                    return Some(ToolResult::error_json(format!(
                        "Invalid arguments for completeTask: {e}"
                    )));
                }
            };
            Some(complete_task::handle(params, store).await)
        }

        "deleteTask" => {
            let params: DeleteTaskParams = match serde_json::from_value(args) {
                Ok(p) => p,
                Err(e) => {
                    return Some(ToolResult::error_json(format!(
                        "Invalid arguments for deleteTask: {e}"
                    )));
                }
            };
            Some(delete_task::handle(params, store).await)
        }

        _ => None,
    }
}

fn wrap_tool_result(req: &JsonRpcRequest, result: ToolResult) -> JsonRpcResponse {
    let value =
        serde_json::to_value(&result).expect("ToolResult must serialize to JSON Value");
    JsonRpcResponse::success(&req.jsonrpc, req.id.clone(), value)
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

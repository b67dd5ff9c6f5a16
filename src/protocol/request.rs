use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID — may be a number or string per spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

fn default_jsonrpc() -> String {
    "2.0".into()
}

/// JSON-RPC 2.0 request envelope.
///
/// A missing `jsonrpc` field defaults to `"2.0"`; whatever value arrives is
/// echoed back verbatim in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<RpcId>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Parameters for `tools/call`.
///
/// `name` defaults to empty so that a missing name surfaces as an unknown
/// tool (-32601) rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
}

/// Arguments for the `addTask` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTaskParams {
    pub title: String,
}

/// Arguments for the `completeTask` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteTaskParams {
    pub id: i64,
}

/// Arguments for the `deleteTask` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTaskParams {
    pub id: i64,
}

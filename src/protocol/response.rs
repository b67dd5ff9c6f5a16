use serde::Serialize;

use super::request::RpcId;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
///
/// The `jsonrpc` field echoes the request's version string rather than being
/// hardcoded, so clients sending a nonstandard version get it back unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(jsonrpc: &str, id: Option<RpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: jsonrpc.into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(jsonrpc: &str, id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: jsonrpc.into(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object (protocol-level errors).
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self {
            code: -32700,
            message: "Parse error".into(),
        }
    }

    pub fn invalid_request_with(detail: impl Into<String>) -> Self {
        Self {
            code: -32600,
            message: detail.into(),
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {method}"),
        }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self {
            code: -32603,
            message: detail.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// MCP tool result layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// MCP tool call result wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// A single content block inside a tool result.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: true,
        }
    }

    /// Success payload rendered as pretty-printed JSON text.
    pub fn json(payload: &serde_json::Value) -> Self {
        Self::text(render_json(payload))
    }

    /// In-band tool failure: a `{"success":false,"error":…}` payload with
    /// `isError` set, inside an otherwise successful protocol response.
    pub fn error_json(message: impl Into<String>) -> Self {
        let payload = serde_json::json!({
            "success": false,
            "error": message.into(),
        });
        Self::error(render_json(&payload))
    }
}

fn render_json(payload: &serde_json::Value) -> String {
    serde_json::to_string_pretty(payload).expect("tool payload must serialize to JSON string")
}

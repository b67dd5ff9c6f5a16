pub mod request;
pub mod response;

pub use request::{
    AddTaskParams, CompleteTaskParams, DeleteTaskParams, JsonRpcRequest, RpcId, ToolCallParams,
};
pub use response::{JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent};

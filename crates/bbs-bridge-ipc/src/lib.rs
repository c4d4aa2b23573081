#![deny(clippy::all)]

pub mod protocol;
pub mod tools;

pub use bbs_bridge_common::error_codes;

pub use protocol::ErrorObject;
pub use protocol::JSONRPC_VERSION;
pub use protocol::RequestId;
pub use protocol::RpcError;
pub use protocol::RpcRequest;
pub use protocol::RpcResponse;
pub use protocol::parse_request;
pub use tools::ReturnMode;
pub use tools::ToolCall;
pub use tools::ToolContent;
pub use tools::ToolDefinition;
pub use tools::ToolResult;
pub use tools::all_tools;
pub use tools::find_tool;

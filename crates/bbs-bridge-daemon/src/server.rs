//! Stdio MCP server loop.
//!
//! One JSON-RPC message per line in, one response per line out. Requests are
//! handled strictly in order; a tool call finishes (including its screen
//! wait) before the next line is read.

use async_trait::async_trait;
use bbs_bridge_ipc::RpcError;
use bbs_bridge_ipc::RpcRequest;
use bbs_bridge_ipc::RpcResponse;
use bbs_bridge_ipc::ToolCall;
use bbs_bridge_ipc::ToolDefinition;
use bbs_bridge_ipc::ToolResult;
use bbs_bridge_ipc::parse_request;
use serde_json::Value;
use serde_json::json;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "bbs-bridge";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[async_trait]
pub trait ToolHandler: Send + Sync {
    fn tools(&self) -> Vec<ToolDefinition>;

    /// Run one tool. Only protocol faults (such as an unknown tool name) are
    /// `Err`; tool failures come back as a flagged [`ToolResult`].
    async fn call_tool(&self, call: ToolCall) -> Result<ToolResult, RpcError>;
}

pub struct McpServer<H> {
    handler: H,
}

impl<H: ToolHandler> McpServer<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Serve until `input` reaches end of file.
    pub async fn serve<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(server = SERVER_NAME, "MCP server listening on stdio");
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };
            let encoded = response.to_line();
            debug!(response = %encoded, "Sending");
            output.write_all(encoded.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }
        info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle one raw line; `None` when nothing should be written back.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        debug!(request = %line, "Received");

        match parse_request(line) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => {
                warn!(error = %err, "Unreadable request");
                Some(RpcResponse::error(None, err))
            }
        }
    }

    async fn handle_request(&self, request: RpcRequest) -> Option<RpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "Notification");
            return None;
        }

        let id = request.id.clone();
        let result = match request.method.as_str() {
            "initialize" => Ok(self.initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.handler.tools() })),
            "tools/call" => self.call_tool(request.params).await,
            method => {
                warn!(method, "Unknown method");
                Err(RpcError::MethodNotFound(method.to_string()))
            }
        };

        Some(match result {
            Ok(value) => RpcResponse::success(id, value),
            Err(err) => RpcResponse::error(id, err),
        })
    }

    fn initialize_result(&self) -> Value {
        info!("MCP client initialized");
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            }
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let call = ToolCall::from_params(params)
            .map_err(|e| RpcError::InvalidParams(e.to_string()))?;
        debug!(tool = %call.name, "Calling tool");

        let result = self.handler.call_tool(call).await?;
        serde_json::to_value(result).map_err(|e| RpcError::Internal(e.to_string()))
    }
}

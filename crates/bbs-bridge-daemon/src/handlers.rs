//! Tool handlers: the eight `bbs_*` tools over one shared session.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bbs_bridge_core::ScreenSnapshot;
use bbs_bridge_core::ScreenSource;
use bbs_bridge_core::parse_context;
use bbs_bridge_core::summarize;
use bbs_bridge_ipc::ReturnMode;
use bbs_bridge_ipc::RpcError;
use bbs_bridge_ipc::ToolCall;
use bbs_bridge_ipc::ToolDefinition;
use bbs_bridge_ipc::ToolResult;
use bbs_bridge_ipc::all_tools;
use bbs_bridge_terminal::encode_ctrl;
use bbs_bridge_terminal::encode_key;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::BridgeConfig;
use crate::error::SessionError;
use crate::login::auto_login;
use crate::server::ToolHandler;
use crate::session::ConnectOutcome;
use crate::session::DisconnectOutcome;
use crate::session::Session;
use crate::sleeper::RealSleeper;
use crate::sleeper::Sleeper;
use crate::transport::Connector;
use crate::transport::WebSocketConnector;
use crate::wait::await_stable_screen_since;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tool {
    Connect,
    AutoLogin,
    Send,
    SendKey,
    SendCtrl,
    GetScreen,
    GetContext,
    Disconnect,
}

impl Tool {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bbs_connect" => Tool::Connect,
            "bbs_auto_login" => Tool::AutoLogin,
            "bbs_send" => Tool::Send,
            "bbs_send_key" => Tool::SendKey,
            "bbs_send_ctrl" => Tool::SendCtrl,
            "bbs_get_screen" => Tool::GetScreen,
            "bbs_get_context" => Tool::GetContext,
            "bbs_disconnect" => Tool::Disconnect,
            _ => return None,
        })
    }
}

/// Serves every tool against a single session.
///
/// The session lives behind an async mutex that is held for the whole call,
/// so a command and the screen wait that follows it never interleave with
/// another command.
pub struct BridgeToolHandler {
    session: Mutex<Session>,
    config: BridgeConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl BridgeToolHandler {
    /// Handler that dials the configured WebSocket endpoint.
    pub fn new(config: BridgeConfig) -> Self {
        let connector = Arc::new(WebSocketConnector::new(
            config.endpoint.clone(),
            config.origin.clone(),
        ));
        Self::with_parts(config, connector, Arc::new(RealSleeper))
    }

    pub fn with_parts(
        config: BridgeConfig,
        connector: Arc<dyn Connector>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        let session = Session::new(connector, config.connect_timeout);
        Self {
            session: Mutex::new(session),
            config,
            sleeper,
        }
    }

    /// Close the link, if any.
    pub async fn shutdown(&self) {
        let outcome = self.session.lock().await.disconnect().await;
        debug!(?outcome, "Session shut down");
    }

    async fn dispatch(&self, tool: Tool, call: &ToolCall) -> Result<String, SessionError> {
        let mode = call.return_mode();
        match tool {
            Tool::Connect => self.connect().await,
            Tool::AutoLogin => self.auto_login(mode).await,
            Tool::Send => {
                let text = required(call, "text")?;
                self.send_text(text, mode).await
            }
            Tool::SendKey => {
                let key = required(call, "key")?;
                self.send_key(key, mode).await
            }
            Tool::SendCtrl => {
                let letter = required(call, "letter")?;
                self.send_ctrl(letter, mode).await
            }
            Tool::GetScreen => self.get_screen(mode).await,
            Tool::GetContext => self.get_context().await,
            Tool::Disconnect => Ok(self.disconnect().await),
        }
    }

    async fn connect(&self) -> Result<String, SessionError> {
        let mut session = self.session.lock().await;
        Ok(match session.connect().await? {
            ConnectOutcome::Connected => "Successfully connected to Bahamut BBS!".to_string(),
            ConnectOutcome::AlreadyConnected => "Already connected to BBS".to_string(),
        })
    }

    async fn disconnect(&self) -> String {
        let mut session = self.session.lock().await;
        match session.disconnect().await {
            DisconnectOutcome::Disconnected => "Disconnected from BBS".to_string(),
            DisconnectOutcome::NotConnected => "Not connected to BBS".to_string(),
        }
    }

    async fn send_text(&self, text: &str, mode: ReturnMode) -> Result<String, SessionError> {
        let mut session = self.session.lock().await;
        session.ensure_connected()?;
        let baseline = session.screen().snapshot();
        session.send_text(text).await?;
        let screen = self.settle(&session, &baseline, self.config.text_deadline).await;
        Ok(format!(
            "Sent input: [HIDDEN]\n\n{}:\n{}",
            response_label(mode),
            render(&screen, mode)
        ))
    }

    async fn send_key(&self, key: &str, mode: ReturnMode) -> Result<String, SessionError> {
        let mut session = self.session.lock().await;
        session.ensure_connected()?;
        let bytes = encode_key(key)?;
        let baseline = session.screen().snapshot();
        session.send_bytes(bytes).await?;
        let screen = self.settle(&session, &baseline, self.config.key_deadline).await;
        Ok(format!(
            "Sent key: {}\n\n{}:\n{}",
            key,
            response_label(mode),
            render(&screen, mode)
        ))
    }

    async fn send_ctrl(&self, letter: &str, mode: ReturnMode) -> Result<String, SessionError> {
        let mut session = self.session.lock().await;
        session.ensure_connected()?;
        let ctrl = encode_ctrl(letter)?;
        let baseline = session.screen().snapshot();
        session.send_bytes(&ctrl.bytes()).await?;
        let screen = self.settle(&session, &baseline, self.config.key_deadline).await;
        Ok(format!(
            "Sent Ctrl+{} (code: {})\n\n{}:\n{}",
            ctrl.letter,
            ctrl.code,
            response_label(mode),
            render(&screen, mode)
        ))
    }

    async fn get_screen(&self, mode: ReturnMode) -> Result<String, SessionError> {
        let screen = self.session.lock().await.snapshot()?;
        Ok(format!(
            "Current screen {}:\n{}",
            screen_label(mode),
            render(&screen, mode)
        ))
    }

    async fn get_context(&self) -> Result<String, SessionError> {
        let screen = self.session.lock().await.snapshot()?;
        let context = parse_context(&screen);
        debug!(state = %context.state(), "Parsed screen context");
        Ok(serde_json::to_string_pretty(&context).unwrap_or_else(|e| {
            format!(r#"{{"error": "failed to serialize context: {}"}}"#, e)
        }))
    }

    async fn auto_login(&self, mode: ReturnMode) -> Result<String, SessionError> {
        let mut session = self.session.lock().await;
        let steps = auto_login(
            &mut session,
            self.config.credentials.as_ref(),
            self.sleeper.as_ref(),
        )
        .await?;
        // The remote may hang up during the script; its last screen still stands.
        let screen = session.screen().snapshot();
        Ok(format!(
            "Auto-login completed!\n\nSteps:\n{}\n\nCurrent screen {}:\n{}",
            steps.join("\n"),
            screen_label(mode),
            render(&screen, mode)
        ))
    }

    /// Wait for the reply to a command, then read the screen it left. This
    /// holds even if the remote hung up while the reply was drawn.
    async fn settle(
        &self,
        session: &Session,
        baseline: &ScreenSnapshot,
        deadline: Duration,
    ) -> ScreenSnapshot {
        let terminal = session.screen().clone();
        let outcome =
            await_stable_screen_since(&terminal, baseline, deadline, &self.config.wait).await;
        debug!(?outcome, connected = session.is_connected(), "Command settled");
        terminal.snapshot()
    }
}

#[async_trait]
impl ToolHandler for BridgeToolHandler {
    fn tools(&self) -> Vec<ToolDefinition> {
        all_tools()
    }

    async fn call_tool(&self, call: ToolCall) -> Result<ToolResult, RpcError> {
        let tool = Tool::from_name(&call.name)
            .ok_or_else(|| RpcError::InvalidParams(format!("Unknown tool: {}", call.name)))?;

        match self.dispatch(tool, &call).await {
            Ok(text) => Ok(ToolResult::text(text)),
            Err(err) => {
                warn!(
                    tool = %call.name,
                    code = err.code(),
                    category = %err.category(),
                    retryable = err.is_retryable(),
                    suggestion = %err.suggestion(),
                    error = %err,
                    "Tool call failed"
                );
                Ok(ToolResult::error(err))
            }
        }
    }
}

/// A required string argument; empty counts as missing.
fn required<'a>(call: &'a ToolCall, name: &str) -> Result<&'a str, SessionError> {
    call.arg_str(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SessionError::MissingParameter(name.to_string()))
}

fn render(screen: &ScreenSnapshot, mode: ReturnMode) -> String {
    match mode {
        ReturnMode::Summary => summarize(screen).to_string(),
        ReturnMode::Full => screen.text().to_string(),
    }
}

fn response_label(mode: ReturnMode) -> &'static str {
    match mode {
        ReturnMode::Summary => "Summary",
        ReturnMode::Full => "Response",
    }
}

fn screen_label(mode: ReturnMode) -> &'static str {
    match mode {
        ReturnMode::Summary => "summary",
        ReturnMode::Full => "",
    }
}

//! The single bridge session: one link, one virtual screen.
//!
//! Commands are not correlated with the output they cause; the screen is
//! shared ground truth. Callers must therefore run one command at a time
//! against a session, including the wait that follows it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use bbs_bridge_core::ScreenSnapshot;
use bbs_bridge_core::ScreenSource;
use bbs_bridge_terminal::Big5Decoder;
use bbs_bridge_terminal::VirtualTerminal;
use bbs_bridge_terminal::encode_big5;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::transport::Connector;
use crate::transport::LinkWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Uninitialized,
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected,
    AlreadyConnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectOutcome {
    Disconnected,
    NotConnected,
}

pub struct Session {
    connector: Arc<dyn Connector>,
    connect_timeout: Duration,
    terminal: VirtualTerminal,
    state: LinkState,
    writer: Option<Box<dyn LinkWriter>>,
    pump: Option<JoinHandle<()>>,
    /// Cleared by the pump when the remote closes the link.
    alive: Arc<AtomicBool>,
}

impl Session {
    pub fn new(connector: Arc<dyn Connector>, connect_timeout: Duration) -> Self {
        Self {
            connector,
            connect_timeout,
            terminal: VirtualTerminal::default(),
            state: LinkState::Uninitialized,
            writer: None,
            pump: None,
            alive: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> LinkState {
        match self.state {
            LinkState::Connected if !self.alive.load(Ordering::SeqCst) => LinkState::Disconnected,
            state => state,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state() == LinkState::Connected
    }

    pub fn ensure_connected(&self) -> Result<(), SessionError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(SessionError::NotConnected)
        }
    }

    pub async fn connect(&mut self) -> Result<ConnectOutcome, SessionError> {
        if self.is_connected() {
            return Ok(ConnectOutcome::AlreadyConnected);
        }
        // A link the remote already dropped still has a pump and writer.
        self.release().await;

        let secs = self.connect_timeout.as_secs();
        let link = tokio::time::timeout(self.connect_timeout, self.connector.connect())
            .await
            .map_err(|_| {
                warn!(timeout_secs = secs, "Connection attempt timed out");
                SessionError::ConnectionTimeout(secs)
            })??;

        self.terminal.reset();
        let alive = Arc::new(AtomicBool::new(true));
        self.pump = Some(tokio::spawn(pump(
            link.inbound,
            self.terminal.clone(),
            Arc::clone(&alive),
        )));
        self.alive = alive;
        self.writer = Some(link.writer);
        self.state = LinkState::Connected;
        info!("Session connected");
        Ok(ConnectOutcome::Connected)
    }

    pub async fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        self.ensure_connected()?;
        let writer = self.writer.as_mut().ok_or(SessionError::NotConnected)?;
        debug!(len = bytes.len(), "Sending bytes");
        writer.send(bytes).await.map_err(|e| {
            warn!(error = %e, "Send failed");
            SessionError::from(e)
        })
    }

    /// Send `text` Big5-encoded. The text itself is never logged.
    pub async fn send_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.send_bytes(&encode_big5(text)).await
    }

    /// The current screen; fails when there is no live link.
    pub fn snapshot(&self) -> Result<ScreenSnapshot, SessionError> {
        self.ensure_connected()?;
        Ok(self.terminal.snapshot())
    }

    /// Shared handle to the screen, for polling while a command settles.
    pub fn screen(&self) -> &VirtualTerminal {
        &self.terminal
    }

    pub async fn disconnect(&mut self) -> DisconnectOutcome {
        let was_connected = self.is_connected();
        self.release().await;
        self.terminal.reset();
        if self.state != LinkState::Uninitialized {
            self.state = LinkState::Disconnected;
        }

        if was_connected {
            info!("Session disconnected");
            DisconnectOutcome::Disconnected
        } else {
            DisconnectOutcome::NotConnected
        }
    }

    async fn release(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.close().await {
                debug!(error = %e, "Close on a dead link");
            }
        }
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
        self.alive.store(false, Ordering::SeqCst);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
    }
}

/// Decode inbound chunks onto the screen until the link closes.
async fn pump(
    mut inbound: mpsc::Receiver<Vec<u8>>,
    terminal: VirtualTerminal,
    alive: Arc<AtomicBool>,
) {
    let mut decoder = Big5Decoder::new();
    while let Some(chunk) = inbound.recv().await {
        let text = decoder.feed(&chunk);
        terminal.process(&text);
    }
    alive.store(false, Ordering::SeqCst);
    info!("Remote closed the connection");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::test_support::{MockConnector, settle};

    fn session_with(connector: &Arc<MockConnector>) -> Session {
        Session::new(connector.clone(), Duration::from_secs(30))
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle() {
        let connector = Arc::new(MockConnector::new());
        let mut session = session_with(&connector);
        assert_eq!(session.state(), LinkState::Uninitialized);
        assert!(!session.is_connected());

        assert_eq!(session.connect().await.unwrap(), ConnectOutcome::Connected);
        assert_eq!(session.state(), LinkState::Connected);
        assert_eq!(
            session.connect().await.unwrap(),
            ConnectOutcome::AlreadyConnected
        );
        assert_eq!(connector.connect_count(), 1);

        assert_eq!(session.disconnect().await, DisconnectOutcome::Disconnected);
        assert_eq!(session.state(), LinkState::Disconnected);
        assert!(connector.writer_closed());
        assert_eq!(session.disconnect().await, DisconnectOutcome::NotConnected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_before_connect_is_harmless() {
        let connector = Arc::new(MockConnector::new());
        let mut session = session_with(&connector);
        assert_eq!(session.disconnect().await, DisconnectOutcome::NotConnected);
        assert_eq!(session.state(), LinkState::Uninitialized);
    }

    #[tokio::test(start_paused = true)]
    async fn test_inbound_big5_reaches_screen() {
        let connector = Arc::new(MockConnector::new());
        let mut session = session_with(&connector);
        session.connect().await.unwrap();

        // 看板 split across chunks
        connector.feed(&[0xac]).await;
        connector.feed(&[0xdd, 0xaa, 0x4f]).await;
        settle().await;

        assert_eq!(session.snapshot().unwrap().lines()[0], "看板");
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_text_is_big5_encoded() {
        let connector = Arc::new(MockConnector::new());
        let mut session = session_with(&connector);
        session.connect().await.unwrap();

        session.send_text("看板\r").await.unwrap();
        session.send_bytes(b"\x1b[A").await.unwrap();

        assert_eq!(
            connector.sent(),
            vec![vec![0xac, 0xdd, 0xaa, 0x4f, b'\r'], b"\x1b[A".to_vec()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_operations_require_connection() {
        let connector = Arc::new(MockConnector::new());
        let mut session = session_with(&connector);
        assert_eq!(session.snapshot().err(), Some(SessionError::NotConnected));
        assert_eq!(
            session.send_text("hi").await,
            Err(SessionError::NotConnected)
        );
        assert!(connector.sent().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_close_marks_disconnected() {
        let connector = Arc::new(MockConnector::new());
        let mut session = session_with(&connector);
        session.connect().await.unwrap();

        connector.close_remote();
        settle().await;

        assert_eq!(session.state(), LinkState::Disconnected);
        assert_eq!(session.snapshot().err(), Some(SessionError::NotConnected));

        // Reconnecting replaces the dead link.
        assert_eq!(session.connect().await.unwrap(), ConnectOutcome::Connected);
        assert_eq!(connector.connect_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconnect_resets_screen() {
        let connector = Arc::new(MockConnector::new());
        let mut session = session_with(&connector);
        session.connect().await.unwrap();
        connector.feed(b"old screen").await;
        settle().await;

        session.disconnect().await;
        session.connect().await.unwrap();
        assert!(session.snapshot().unwrap().is_blank());
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_failure_propagates() {
        let connector = Arc::new(MockConnector::failing(TransportError::Connect(
            "refused".into(),
        )));
        let mut session = session_with(&connector);
        let err = session.connect().await.unwrap_err();
        assert_eq!(
            err,
            SessionError::Transport(TransportError::Connect("refused".into()))
        );
        assert!(!session.is_connected());
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_times_out() {
        let connector = Arc::new(MockConnector::hanging());
        let mut session = Session::new(connector.clone(), Duration::from_secs(30));
        let started = tokio::time::Instant::now();

        let err = session.connect().await.unwrap_err();

        assert_eq!(err, SessionError::ConnectionTimeout(30));
        assert_eq!(started.elapsed(), Duration::from_secs(30));
        assert!(!session.is_connected());
    }
}

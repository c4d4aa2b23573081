use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use bbs_bridge_common::mutex_lock_or_recover;
use tokio::sync::mpsc;

use crate::error::TransportError;
use crate::transport::Connector;
use crate::transport::Link;
use crate::transport::LinkWriter;

type Responder = Arc<dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync>;

enum Behavior {
    Succeed,
    Fail(TransportError),
    Hang,
}

#[derive(Default)]
struct LinkRecord {
    sent: Vec<Vec<u8>>,
    inbound: Option<mpsc::Sender<Vec<u8>>>,
    writer_closed: bool,
    connects: usize,
}

/// In-memory stand-in for the remote service.
///
/// Records every outgoing chunk and lets the test push inbound bytes. An
/// optional responder answers each send, which is how tests make the screen
/// change after a command.
pub struct MockConnector {
    behavior: Behavior,
    record: Arc<Mutex<LinkRecord>>,
    responder: Option<Responder>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Succeed)
    }

    pub fn failing(err: TransportError) -> Self {
        Self::with_behavior(Behavior::Fail(err))
    }

    /// Never completes the handshake.
    pub fn hanging() -> Self {
        Self::with_behavior(Behavior::Hang)
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            record: Arc::new(Mutex::new(LinkRecord::default())),
            responder: None,
        }
    }

    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        self.responder = Some(Arc::new(responder));
        self
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        mutex_lock_or_recover(&self.record).sent.clone()
    }

    pub fn connect_count(&self) -> usize {
        mutex_lock_or_recover(&self.record).connects
    }

    pub fn writer_closed(&self) -> bool {
        mutex_lock_or_recover(&self.record).writer_closed
    }

    /// Push bytes as if the remote had sent them.
    pub async fn feed(&self, bytes: &[u8]) {
        let sender = mutex_lock_or_recover(&self.record).inbound.clone();
        if let Some(sender) = sender {
            let _ = sender.send(bytes.to_vec()).await;
        }
    }

    /// Drop the remote end of the current link.
    pub fn close_remote(&self) {
        mutex_lock_or_recover(&self.record).inbound = None;
    }
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self) -> Result<Link, TransportError> {
        match &self.behavior {
            Behavior::Succeed => {}
            Behavior::Fail(err) => return Err(err.clone()),
            Behavior::Hang => std::future::pending::<()>().await,
        }

        let (tx, rx) = mpsc::channel(64);
        {
            let mut record = mutex_lock_or_recover(&self.record);
            record.connects += 1;
            record.inbound = Some(tx);
            record.writer_closed = false;
        }
        Ok(Link {
            writer: Box::new(MockWriter {
                record: Arc::clone(&self.record),
                responder: self.responder.clone(),
            }),
            inbound: rx,
        })
    }
}

struct MockWriter {
    record: Arc<Mutex<LinkRecord>>,
    responder: Option<Responder>,
}

#[async_trait]
impl LinkWriter for MockWriter {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let mut record = mutex_lock_or_recover(&self.record);
        if record.writer_closed {
            return Err(TransportError::Closed);
        }
        record.sent.push(bytes.to_vec());
        if let Some(reply) = self.responder.as_ref().and_then(|respond| respond(bytes)) {
            if let Some(inbound) = &record.inbound {
                let _ = inbound.try_send(reply);
            }
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        let mut record = mutex_lock_or_recover(&self.record);
        record.writer_closed = true;
        record.inbound = None;
        Ok(())
    }
}

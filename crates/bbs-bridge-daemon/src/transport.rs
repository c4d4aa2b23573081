//! Byte link to the remote terminal service.
//!
//! A [`Connector`] opens a [`Link`]: a writer half for outgoing bytes and a
//! channel of raw inbound chunks. The channel closes when the remote goes
//! away. Nothing here knows about text encodings or screens.

use async_trait::async_trait;
use futures_util::SinkExt;
use futures_util::StreamExt;
use futures_util::stream::SplitSink;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::http::header::ORIGIN;
use tracing::{debug, info, warn};

use crate::error::TransportError;

const INBOUND_CAPACITY: usize = 256;

#[async_trait]
pub trait LinkWriter: Send + Sync {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError>;
    async fn close(&mut self) -> Result<(), TransportError>;
}

pub struct Link {
    pub writer: Box<dyn LinkWriter>,
    pub inbound: mpsc::Receiver<Vec<u8>>,
}

#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<Link, TransportError>;
}

/// `wss://` (or `ws://`) connector that presents a fixed `Origin`.
#[derive(Debug, Clone)]
pub struct WebSocketConnector {
    url: String,
    origin: String,
}

impl WebSocketConnector {
    pub fn new(url: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            origin: origin.into(),
        }
    }
}

#[async_trait]
impl Connector for WebSocketConnector {
    async fn connect(&self) -> Result<Link, TransportError> {
        let mut request = self
            .url
            .as_str()
            .into_client_request()
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        let origin = HeaderValue::from_str(&self.origin)
            .map_err(|e| TransportError::Connect(format!("invalid origin: {}", e)))?;
        request.headers_mut().insert(ORIGIN, origin);

        debug!(url = %self.url, "Opening WebSocket");
        let (stream, _response) = tokio_tungstenite::connect_async(request)
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        info!(url = %self.url, "WebSocket connected");

        let (sink, mut source) = stream.split();
        let (tx, rx) = mpsc::channel(INBOUND_CAPACITY);

        tokio::spawn(async move {
            while let Some(message) = source.next().await {
                let chunk = match message {
                    Ok(Message::Binary(data)) => data,
                    Ok(Message::Text(text)) => text.into_bytes(),
                    Ok(Message::Close(frame)) => {
                        debug!(?frame, "WebSocket close frame received");
                        break;
                    }
                    Ok(_) => continue,
                    Err(e) => {
                        warn!(error = %e, "WebSocket read failed");
                        break;
                    }
                };
                if tx.send(chunk).await.is_err() {
                    break;
                }
            }
            debug!("WebSocket reader finished");
        });

        Ok(Link {
            writer: Box::new(WebSocketWriter { sink }),
            inbound: rx,
        })
    }
}

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

struct WebSocketWriter {
    sink: WsSink,
}

#[async_trait]
impl LinkWriter for WebSocketWriter {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.sink
            .send(Message::Binary(bytes.to_vec()))
            .await
            .map_err(|e| TransportError::Send(e.to_string()))
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.sink
            .close()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))
    }
}

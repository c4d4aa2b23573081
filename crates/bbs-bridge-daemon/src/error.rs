//! Domain errors for bridge operations.
//!
//! Each error maps to a JSON-RPC error code and a category, and carries a
//! suggestion for the agent's next step.

use bbs_bridge_ipc::error_codes::{self, ErrorCategory};
use bbs_bridge_terminal::KeyError;
use thiserror::Error;

/// Failures of the socket link to the remote service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("WebSocket error: {0}")]
    Connect(String),
    #[error("Failed to send to BBS: {0}")]
    Send(String),
    #[error("Connection closed by remote")]
    Closed,
}

impl TransportError {
    pub fn code(&self) -> i32 {
        error_codes::TRANSPORT_ERROR
    }

    pub fn suggestion(&self) -> String {
        match self {
            TransportError::Connect(_) => {
                "Check network access to the BBS endpoint (BBS_ENDPOINT) and try bbs_connect again."
                    .to_string()
            }
            TransportError::Send(_) | TransportError::Closed => {
                "The connection was lost. Run bbs_disconnect, then bbs_connect to start over."
                    .to_string()
            }
        }
    }
}

/// Failures of a tool call, reported to the agent as text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Not connected to BBS. Use bbs_connect first.")]
    NotConnected,
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Invalid letter for Ctrl combination: {0}")]
    InvalidCtrlLetter(String),
    #[error("Connection timeout after {0} seconds. The WebSocket handshake did not complete.")]
    ConnectionTimeout(u64),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(
        "BBS credentials not found. Set BBS_USERNAME and BBS_PASSWORD in the environment or a .env file."
    )]
    CredentialsMissing,
}

impl From<KeyError> for SessionError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::UnknownKey(key) => SessionError::UnknownKey(key),
            KeyError::InvalidCtrlLetter(letter) => SessionError::InvalidCtrlLetter(letter),
        }
    }
}

impl SessionError {
    /// Returns the JSON-RPC error code for this error.
    pub fn code(&self) -> i32 {
        match self {
            SessionError::NotConnected => error_codes::NOT_CONNECTED,
            SessionError::MissingParameter(_) => error_codes::MISSING_PARAMETER,
            SessionError::UnknownKey(_) => error_codes::UNKNOWN_KEY,
            SessionError::InvalidCtrlLetter(_) => error_codes::INVALID_CTRL_LETTER,
            SessionError::ConnectionTimeout(_) => error_codes::CONNECTION_TIMEOUT,
            SessionError::Transport(err) => err.code(),
            SessionError::CredentialsMissing => error_codes::CREDENTIALS_MISSING,
        }
    }

    /// Returns the error category for programmatic handling.
    pub fn category(&self) -> ErrorCategory {
        error_codes::category_for_code(self.code())
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            SessionError::NotConnected => "Run bbs_connect first.".to_string(),
            SessionError::MissingParameter(name) => {
                format!("Pass the '{}' argument; see tools/list for the schema.", name)
            }
            SessionError::UnknownKey(key) => KeyError::UnknownKey(key.clone()).suggestion(),
            SessionError::InvalidCtrlLetter(letter) => {
                KeyError::InvalidCtrlLetter(letter.clone()).suggestion()
            }
            SessionError::ConnectionTimeout(_) => {
                "The server did not answer in time. Retry, or raise BBS_CONNECT_TIMEOUT.".to_string()
            }
            SessionError::Transport(err) => err.suggestion(),
            SessionError::CredentialsMissing => {
                "Add BBS_USERNAME and BBS_PASSWORD to .env, or log in by hand with bbs_send."
                    .to_string()
            }
        }
    }

    /// Returns whether this error is potentially transient and may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        error_codes::is_retryable(self.code())
    }
}

//! Semantic error codes for JSON-RPC domain errors.
//!
//! Error codes follow the JSON-RPC 2.0 specification:
//! - -32700 to -32600: Reserved protocol errors
//! - -32000 to -32099: Server errors (we use -32001 to -32009 for domain errors)

// Protocol errors
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// Session-related errors
pub const NOT_CONNECTED: i32 = -32001;

// Input errors
pub const MISSING_PARAMETER: i32 = -32003;
pub const UNKNOWN_KEY: i32 = -32005;
pub const INVALID_CTRL_LETTER: i32 = -32006;

// Transport errors
pub const CONNECTION_TIMEOUT: i32 = -32007;
pub const TRANSPORT_ERROR: i32 = -32008;

// Configuration errors
pub const CREDENTIALS_MISSING: i32 = -32009;

/// Error category for programmatic handling by AI agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Resource not found (no session)
    NotFound,
    /// Invalid input parameters or missing configuration
    InvalidInput,
    /// Internal server error
    Internal,
    /// External dependency failure (socket, remote host)
    External,
    /// Operation timed out
    Timeout,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::Internal => "internal",
            ErrorCategory::External => "external",
            ErrorCategory::Timeout => "timeout",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns whether an error code represents a retriable operation.
///
/// Connection timeouts and transport faults are transient: reconnecting
/// may succeed.
pub fn is_retryable(code: i32) -> bool {
    matches!(code, CONNECTION_TIMEOUT | TRANSPORT_ERROR)
}

/// Returns the error category for a given error code.
pub fn category_for_code(code: i32) -> ErrorCategory {
    match code {
        NOT_CONNECTED => ErrorCategory::NotFound,
        MISSING_PARAMETER | UNKNOWN_KEY | INVALID_CTRL_LETTER | CREDENTIALS_MISSING
        | INVALID_PARAMS | INVALID_REQUEST | METHOD_NOT_FOUND | PARSE_ERROR => {
            ErrorCategory::InvalidInput
        }
        TRANSPORT_ERROR => ErrorCategory::External,
        CONNECTION_TIMEOUT => ErrorCategory::Timeout,
        _ => ErrorCategory::Internal,
    }
}

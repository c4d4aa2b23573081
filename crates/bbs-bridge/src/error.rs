//! CLI errors and their sysexits.h exit codes.

use std::io;
use std::path::PathBuf;

use bbs_bridge_common::error_codes::ErrorCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start the async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("Stdio failed: {0}")]
    Stdio(#[source] io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ReadInput { .. } => ErrorCategory::InvalidInput,
            AppError::Runtime(_) | AppError::Encode(_) => ErrorCategory::Internal,
            AppError::Stdio(_) => ErrorCategory::External,
        }
    }

    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AppError::ReadInput { .. } => Some("Check the path. Use --raw for captured wire bytes."),
            AppError::Stdio(_) => Some("The MCP client closed the pipe; restart the server."),
            AppError::Runtime(_) | AppError::Encode(_) => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::InvalidInput => 64, // EX_USAGE
            ErrorCategory::NotFound => 69,     // EX_UNAVAILABLE
            ErrorCategory::External => 74,     // EX_IOERR
            ErrorCategory::Internal => 70,     // EX_SOFTWARE
            ErrorCategory::Timeout => 75,      // EX_TEMPFAIL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message_and_code() {
        let err = AppError::ReadInput {
            path: PathBuf::from("/nope/screen.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read /nope/screen.txt: No such file or directory"
        );
        assert_eq!(err.exit_code(), 64);
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_stdio_error_is_external() {
        let err = AppError::Stdio(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(err.category(), ErrorCategory::External);
        assert_eq!(err.exit_code(), 74);
    }
}

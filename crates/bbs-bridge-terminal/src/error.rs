//! Input encoding errors.

use thiserror::Error;

use crate::keys::KEY_NAMES;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Invalid letter for Ctrl combination: {0}")]
    InvalidCtrlLetter(String),
}

impl KeyError {
    pub fn suggestion(&self) -> String {
        match self {
            KeyError::UnknownKey(_) => format!("Use one of: {}.", KEY_NAMES.join(", ")),
            KeyError::InvalidCtrlLetter(_) => {
                "Pass a single letter, e.g. 'x' for Ctrl+X.".to_string()
            }
        }
    }
}

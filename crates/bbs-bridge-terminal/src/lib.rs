#![deny(clippy::all)]

mod codec;
pub mod error;
mod keys;
mod terminal;

pub use codec::Big5Decoder;
pub use codec::encode_big5;
pub use error::KeyError;
pub use keys::CtrlCode;
pub use keys::KEY_NAMES;
pub use keys::encode_ctrl;
pub use keys::encode_key;
pub use terminal::VirtualTerminal;
pub use terminal::{SCREEN_COLS, SCREEN_ROWS};

pub type Result<T> = std::result::Result<T, KeyError>;

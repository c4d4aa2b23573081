//! Symbolic key names and Ctrl combinations to the bytes the remote expects.

use crate::error::KeyError;

const ESC: u8 = 0x1b;

/// Recognised key names; matching is case-insensitive.
pub const KEY_NAMES: &[&str] = &[
    "up",
    "down",
    "right",
    "left",
    "pgup",
    "pageup",
    "pgdn",
    "pagedown",
    "home",
    "end",
    "enter",
    "esc",
    "space",
    "backspace",
    "delete",
    "insert",
];

pub fn encode_key(name: &str) -> Result<&'static [u8], KeyError> {
    let bytes: &'static [u8] = match name.to_ascii_lowercase().as_str() {
        "up" => &[ESC, b'[', b'A'],
        "down" => &[ESC, b'[', b'B'],
        "right" => &[ESC, b'[', b'C'],
        "left" => &[ESC, b'[', b'D'],
        "pgup" | "pageup" => &[ESC, b'[', b'5', b'~'],
        "pgdn" | "pagedown" => &[ESC, b'[', b'6', b'~'],
        "home" => &[ESC, b'[', b'H'],
        "end" => &[ESC, b'[', b'F'],
        "enter" => b"\r",
        "esc" => &[ESC],
        "space" => b" ",
        "backspace" => &[0x08],
        "delete" => &[0x7f],
        "insert" => &[ESC, b'[', b'2', b'~'],
        _ => return Err(KeyError::UnknownKey(name.to_string())),
    };
    Ok(bytes)
}

/// A Ctrl+letter combination; `code` is the letter's position in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlCode {
    pub letter: char,
    pub code: u8,
}

impl CtrlCode {
    pub fn bytes(&self) -> [u8; 1] {
        [self.code]
    }
}

pub fn encode_ctrl(letter: &str) -> Result<CtrlCode, KeyError> {
    let mut chars = letter.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(KeyError::InvalidCtrlLetter(letter.to_string()));
    };
    if !c.is_ascii_alphabetic() {
        return Err(KeyError::InvalidCtrlLetter(letter.to_string()));
    }

    let upper = c.to_ascii_uppercase();
    Ok(CtrlCode {
        letter: upper,
        code: upper as u8 - 64,
    })
}

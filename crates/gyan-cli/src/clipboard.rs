//! Clipboard access through the terminal (OSC 52).
//!
//! Most terminal emulators, including over SSH, accept an OSC 52 sequence
//! carrying base64 text and place it on the system clipboard.

use std::io;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use crossterm::{execute, style::Print};
use gyan_artifacts::{error::ShareError, share::Clipboard};

pub struct Osc52Clipboard;

/// The escape sequence that asks the terminal to copy `text`.
pub fn osc52(text: &str) -> String { format!("\x1b]52;c;{}\x07", STANDARD.encode(text)) }

impl Clipboard for Osc52Clipboard {
  fn copy(&self, text: &str) -> Result<(), ShareError> {
    execute!(io::stdout(), Print(osc52(text))).map_err(|e| ShareError::Clipboard(e.to_string()))
  }
}

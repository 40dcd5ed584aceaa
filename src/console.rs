//! Newline-delimited request feed from a serial console.
//!
//! A UART console hands out bytes as they arrive, so one request can span
//! several reads, separated by `WouldBlock` or empty reads. [`LineBuffer`]
//! keeps the partial line across those reads and only yields it once the
//! terminating newline is in. [`dispatch_line`] then renders it.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use emotion_oled::console::LineBuffer;
//!
//! let mut input = Cursor::new("{\"view\": \"waiting\"}\n{\"view\": \"cl");
//! let mut lines = LineBuffer::new();
//!
//! assert_eq!(lines.poll(&mut input).unwrap().as_deref(), Some("{\"view\": \"waiting\"}\n"));
//! assert_eq!(lines.poll(&mut input).unwrap(), None);
//! assert_eq!(lines.pending(), "{\"view\": \"cl");
//! ```

use std::io::{self, BufRead};

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::messages::parse_view_request;
use crate::renderer::{EmotionDisplay, RenderOutcome};
use crate::traits::DisplaySurface;

/// Shown when a console line is not a valid request.
pub const INVALID_REQUEST: &str = "Gecersiz veri";

/// Accumulates console input until a full line is available.
#[derive(Debug, Default)]
pub struct LineBuffer {
    line: String,
}

impl LineBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes received since the last complete line.
    pub fn pending(&self) -> &str {
        &self.line
    }

    /// Reads what is available from `reader`.
    ///
    /// Returns the complete line, newline included, once one has arrived.
    /// `WouldBlock`, `Interrupted` and end of input return `Ok(None)` and keep
    /// the partial line for the next call.
    pub fn poll<R: BufRead>(&mut self, reader: &mut R) -> io::Result<Option<String>> {
        match reader.read_line(&mut self.line) {
            Ok(_) if self.line.ends_with('\n') => Ok(Some(core::mem::take(&mut self.line))),
            Ok(_) => Ok(None),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Parses one console line and renders it.
///
/// Blank lines are skipped and return `None`. A malformed line shows the
/// error view with [`INVALID_REQUEST`].
pub fn dispatch_line<S, D>(display: &mut EmotionDisplay<S, D>, line: &str) -> Option<RenderOutcome>
where
    S: DisplaySurface,
    D: DelayNs,
{
    let input = line.trim();
    if input.is_empty() {
        return None;
    }
    match parse_view_request(input) {
        Some(request) => Some(request.apply(display)),
        None => {
            warn!("ignoring malformed request: {}", input);
            Some(display.show_error(INVALID_REQUEST))
        }
    }
}

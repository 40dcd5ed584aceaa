//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the display surface and the delay
//! provider, enabling development and testing on desktop without a panel.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockSurface`] | [`DisplaySurface`] | Records presented frames, simulates failures |
//! | [`MockDelay`] | [`DelayNs`] | Accumulates requested delay instead of blocking |
//!
//! # Example
//!
//! ```rust
//! use emotion_oled::{Config, EmotionDisplay};
//! use emotion_oled::hal::{MockDelay, MockSurface};
//!
//! let mut display = EmotionDisplay::new(MockSurface::new(), MockDelay::new(), Config::default());
//! display.show_emotion("happy", 0.95);
//!
//! let frame = display.session().surface().last_frame().unwrap();
//! assert!(frame.texts().any(|t| t == "Mutlu"));
//! ```
//!
//! [`DisplaySurface`]: crate::traits::DisplaySurface
//! [`DelayNs`]: embedded_hal::delay::DelayNs

use embedded_hal::delay::DelayNs;

use crate::config::BusConfig;
use crate::layout::{DrawCommand, FontSize, Frame, Point, Rect};
use crate::traits::DisplaySurface;

use alloc::string::String;
use alloc::vec::Vec;

// ============================================================================
// Display Mock
// ============================================================================

/// Failures a [`MockSurface`] can be told to simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockError {
    /// `begin` was configured to fail.
    Handshake,
    /// A draw call was configured to fail.
    Draw,
    /// `present` was configured to fail.
    Present,
}

/// Mock display surface for testing.
///
/// Draw calls are collected into a pending frame; `present` snapshots it into
/// [`frames`](Self::frames). Use the public fields to inspect activity.
///
/// # Example
///
/// ```rust
/// use emotion_oled::config::BusConfig;
/// use emotion_oled::hal::MockSurface;
/// use emotion_oled::traits::DisplaySurface;
///
/// let mut surface = MockSurface::new();
/// surface.fail_begin(1);
///
/// assert!(surface.begin(&BusConfig::default()).is_err());
/// assert!(surface.begin(&BusConfig::default()).is_ok());
/// assert_eq!(surface.begin_calls, 2);
/// ```
#[derive(Debug, Default)]
pub struct MockSurface {
    /// Number of times `begin()` was called.
    pub begin_calls: usize,
    /// Number of times `clear()` was called.
    pub clear_calls: usize,
    /// Number of times `present()` was called.
    pub present_calls: usize,
    /// Every frame successfully presented, oldest first.
    pub frames: Vec<Frame>,
    /// Bus configuration passed to the last `begin()`.
    pub last_bus: Option<BusConfig>,
    /// Whether draw calls fail.
    pub fail_draw: bool,
    /// Whether `present()` fails.
    pub fail_present: bool,
    pending: Frame,
    begin_failures: usize,
}

impl MockSurface {
    /// Creates a mock surface that accepts every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `count` calls to `begin()` fail.
    pub fn fail_begin(&mut self, count: usize) {
        self.begin_failures = count;
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Commands drawn since the last clear that have not been presented.
    pub fn pending(&self) -> &Frame {
        &self.pending
    }

    /// Text of every command in the last presented frame.
    pub fn last_texts(&self) -> Vec<String> {
        self.last_frame()
            .map(|frame| frame.texts().map(String::from).collect())
            .unwrap_or_default()
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), MockError> {
        if self.fail_draw {
            return Err(MockError::Draw);
        }
        self.pending.push(command);
        Ok(())
    }
}

impl DisplaySurface for MockSurface {
    type Error = MockError;

    fn begin(&mut self, bus: &BusConfig) -> Result<(), MockError> {
        self.begin_calls += 1;
        self.last_bus = Some(bus.clone());
        if self.begin_failures > 0 {
            self.begin_failures -= 1;
            return Err(MockError::Handshake);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), MockError> {
        self.clear_calls += 1;
        self.pending = Frame::new();
        Ok(())
    }

    fn draw_text(&mut self, origin: Point, font: FontSize, text: &str) -> Result<(), MockError> {
        self.record(DrawCommand::Text {
            origin,
            font,
            text: String::from(text),
        })
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), MockError> {
        self.record(DrawCommand::Line { from, to })
    }

    fn draw_rect(&mut self, rect: Rect) -> Result<(), MockError> {
        self.record(DrawCommand::Rect(rect))
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), MockError> {
        self.record(DrawCommand::FilledRect(rect))
    }

    fn present(&mut self) -> Result<(), MockError> {
        self.present_calls += 1;
        if self.fail_present {
            return Err(MockError::Present);
        }
        self.frames.push(self.pending.clone());
        Ok(())
    }
}

// ============================================================================
// Delay Mock
// ============================================================================

/// Mock delay provider for testing.
///
/// Records requested delays without blocking.
///
/// # Example
///
/// ```rust
/// use emotion_oled::hal::MockDelay;
/// use embedded_hal::delay::DelayNs;
///
/// let mut delay = MockDelay::new();
/// delay.delay_ms(2000);
/// delay.delay_us(500);
///
/// assert_eq!(delay.total_ms(), 2000);
/// assert_eq!(delay.calls, 2);
/// ```
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total requested delay in nanoseconds.
    pub total_ns: u64,
    /// Number of delay calls.
    pub calls: usize,
}

impl MockDelay {
    /// Creates a mock delay with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay in whole milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += u64::from(us) * 1_000;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
    }
}

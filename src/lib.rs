//! # emotion-oled
//!
//! Shows facial-emotion classification results on a 128x64 monochrome OLED
//! (SSD1306 over I2C) attached to an ESP32 camera board.
//!
//! ## Features
//!
//! - **Lazy initialization**: the panel is brought up on first use, shows a
//!   splash and settles; failures are logged and retried on the next call
//! - **Localized labels**: canonical emotion ids map to Turkish display text
//! - **Views**: emotion with confidence bar, two-line message, waiting
//!   placeholder, error banner, clear
//! - **Hardware abstraction**: a drawing trait with mock, in-memory and
//!   SSD1306 implementations
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `labels` - Emotion id to display text table
//! - `layout` - Pure frame computation for every view
//! - `session` - One-time initialization state machine
//! - `renderer` - Caller-facing view operations
//! - `traits` - Display surface abstraction
//! - `hal` - Concrete surfaces (mock and framebuffer for tests, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use emotion_oled::{Config, EmotionDisplay, RenderOutcome};
//! use emotion_oled::hal::{MockDelay, MockSurface};
//!
//! let mut display = EmotionDisplay::new(MockSurface::new(), MockDelay::new(), Config::default());
//!
//! // First view initializes the panel and holds the splash for 2 s.
//! assert_eq!(display.show_emotion("sad", 0.42), RenderOutcome::Presented);
//!
//! let texts = display.session().surface().last_texts();
//! assert_eq!(texts, ["Duygu Durumu:", "Uzgun", "Guven: 42.0%"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Shared configuration for the panel, the bus and the splash screen.
pub mod config;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Emotion id to display label table.
pub mod labels;
/// Frame layout for every view.
pub mod layout;
/// Caller-facing render operations.
pub mod renderer;
/// Display initialization state machine.
pub mod session;
/// Core traits for display hardware abstraction.
pub mod traits;

/// embedded-graphics rendering of layout primitives.
#[cfg(feature = "graphics")]
pub mod graphics;

/// Message types for upstream services (serde-based).
#[cfg(feature = "serde")]
pub mod messages;

/// Line-oriented request feed for the serial console.
#[cfg(feature = "json")]
pub mod console;

// Re-exports for convenience
pub use config::{BusConfig, Config, ConfigError, DisplayConfig, SplashConfig};
pub use labels::{translate, EmotionLabel};
pub use layout::{DrawCommand, FontSize, Frame, Layout, Point, Rect};
pub use renderer::{EmotionDisplay, RenderOutcome, RenderRequest};
pub use session::{DisplaySession, SessionState};
pub use traits::DisplaySurface;

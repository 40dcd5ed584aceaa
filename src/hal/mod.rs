//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Recording surface and delay for desktop tests
//! - `framebuffer`: Pixel-accurate in-memory surface (requires `graphics` feature)
//! - `esp32`: SSD1306 over I2C on a Deneyap Kart (requires `display` feature)

pub mod mock;

#[cfg(feature = "graphics")]
mod framebuffer;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;

#[cfg(feature = "graphics")]
pub use framebuffer::{FrameBufferSurface, SurfaceError};

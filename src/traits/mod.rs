//! Trait definitions for hardware abstraction.
//!
//! This module defines the seam between the rendering core and the panel
//! driver, so the same session and layouts run on the ESP32, against an
//! in-memory framebuffer, or against a recording mock.
//!
//! # Submodules
//!
//! - `display`: the [`DisplaySurface`] drawing primitives
//!
//! Blocking delays use [`embedded_hal::delay::DelayNs`] directly.

pub mod display;

pub use display::*;

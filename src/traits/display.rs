//! Display driver abstraction.
//!
//! This module defines the [`DisplaySurface`] trait: the drawing primitives the
//! session needs from a physical (or simulated) monochrome panel. The crate
//! never touches raw pixels itself; it only issues these calls.

use crate::config::BusConfig;
use crate::layout::{DrawCommand, FontSize, Point, Rect};

/// Drawing primitives of a monochrome display.
///
/// Implementors provide hardware-specific rendering for panels like the
/// SSD1306 OLED, an in-memory framebuffer, or a recording mock for tests.
///
/// Drawing calls only touch the implementor's buffer; nothing reaches the
/// panel until [`present`](Self::present).
///
/// # Example
///
/// ```ignore
/// use emotion_oled::traits::DisplaySurface;
///
/// struct MyPanel { /* ... */ }
///
/// impl DisplaySurface for MyPanel {
///     type Error = ();
///
///     fn begin(&mut self, bus: &BusConfig) -> Result<(), ()> { Ok(()) }
///     fn clear(&mut self) -> Result<(), ()> { Ok(()) }
///     fn draw_text(&mut self, origin: Point, font: FontSize, text: &str) -> Result<(), ()> { Ok(()) }
///     fn draw_line(&mut self, from: Point, to: Point) -> Result<(), ()> { Ok(()) }
///     fn draw_rect(&mut self, rect: Rect) -> Result<(), ()> { Ok(()) }
///     fn fill_rect(&mut self, rect: Rect) -> Result<(), ()> { Ok(()) }
///     fn present(&mut self) -> Result<(), ()> { Ok(()) }
/// }
/// ```
pub trait DisplaySurface {
    /// Error type for display operations.
    type Error: core::fmt::Debug;

    /// Performs bus setup and the controller handshake.
    ///
    /// May be called again after a failure. There is no timeout beyond
    /// whatever the underlying driver provides.
    fn begin(&mut self, bus: &BusConfig) -> Result<(), Self::Error>;

    /// Clears the drawing buffer.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, font: FontSize, text: &str) -> Result<(), Self::Error>;

    /// Draws a 1px line, both endpoints inclusive.
    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), Self::Error>;

    /// Draws a 1px rectangle outline.
    fn draw_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;

    /// Draws a solid rectangle.
    fn fill_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;

    /// Transfers the drawing buffer to the panel.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Issues a single layout command.
    fn draw(&mut self, command: &DrawCommand) -> Result<(), Self::Error> {
        match command {
            DrawCommand::Text { origin, font, text } => self.draw_text(*origin, *font, text),
            DrawCommand::Line { from, to } => self.draw_line(*from, *to),
            DrawCommand::Rect(rect) => self.draw_rect(*rect),
            DrawCommand::FilledRect(rect) => self.fill_rect(*rect),
        }
    }
}

//! In-memory monochrome display surface.
//!
//! Renders through `embedded-graphics` into a runtime-sized pixel buffer, so
//! layouts can be checked pixel by pixel on desktop. Drawing goes to a back
//! buffer; [`present`](DisplaySurface::present) copies it to the visible one.

use core::convert::Infallible;
use core::fmt;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::BusConfig;
use crate::graphics;
use crate::layout::{self, FontSize, Rect};
use crate::traits::DisplaySurface;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Errors reported by [`FrameBufferSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// No panel answered the handshake.
    NotConnected,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NotConnected => write!(f, "no display answered on the bus"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SurfaceError {}

/// A runtime-sized pixel buffer for embedded-graphics.
#[derive(Debug, Clone)]
struct Canvas {
    buf: Vec<BinaryColor>,
    w: usize,
    h: usize,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self {
            buf: vec![BinaryColor::Off; w * h],
            w,
            h,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < self.w && y < self.h {
                return Some(y * self.w + x);
            }
        }
        None
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = self.idx(p) {
                self.buf[i] = c;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(color);
        Ok(())
    }
}

/// Display surface backed by memory instead of a panel.
///
/// # Example
///
/// ```rust
/// use emotion_oled::{Config, EmotionDisplay};
/// use emotion_oled::hal::{FrameBufferSurface, MockDelay};
///
/// let mut display = EmotionDisplay::new(
///     FrameBufferSurface::new(128, 64),
///     MockDelay::new(),
///     Config::default(),
/// );
/// display.show_emotion("happy", 1.0);
///
/// // The bar is filled across its full 108 px width.
/// let surface = display.session().surface();
/// assert_eq!(surface.count_on_in_row(61, 10, 118), 108);
/// ```
#[derive(Debug, Clone)]
pub struct FrameBufferSurface {
    back: Canvas,
    front: Vec<BinaryColor>,
    connected: bool,
    /// Number of times `begin()` was called.
    pub begin_calls: usize,
    /// Number of times `present()` was called.
    pub present_calls: usize,
}

impl FrameBufferSurface {
    /// Creates a connected `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Self {
        let back = Canvas::new(width, height);
        let front = back.buf.clone();
        Self {
            back,
            front,
            connected: true,
            begin_calls: 0,
            present_calls: 0,
        }
    }

    /// Creates a surface whose handshake fails until reconnected.
    pub fn disconnected(width: u32, height: u32) -> Self {
        Self {
            connected: false,
            ..Self::new(width, height)
        }
    }

    /// Simulates plugging or unplugging the panel.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.back.w as u32
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.back.h as u32
    }

    /// Whether the visible pixel at `(x, y)` is lit. `false` off-screen.
    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.back
            .idx(Point::new(x, y))
            .map(|i| self.front[i] == BinaryColor::On)
            .unwrap_or(false)
    }

    /// Number of lit visible pixels.
    pub fn count_on_pixels(&self) -> usize {
        self.front.iter().filter(|&&p| p == BinaryColor::On).count()
    }

    /// Number of lit visible pixels in row `y` for `x` in `x_start..x_end`.
    pub fn count_on_in_row(&self, y: i32, x_start: i32, x_end: i32) -> usize {
        (x_start..x_end).filter(|&x| self.is_on(x, y)).count()
    }

    /// Number of lit visible pixels inside `rect`.
    pub fn count_on_in(&self, rect: Rect) -> usize {
        let y_end = rect.origin.y + rect.height as i32;
        let x_end = rect.origin.x + rect.width as i32;
        (rect.origin.y..y_end)
            .map(|y| self.count_on_in_row(y, rect.origin.x, x_end))
            .sum()
    }

    /// The visible buffer as rows of `#` and `.`, for debugging.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.back.w + 1) * self.back.h);
        for row in self.front.chunks(self.back.w.max(1)) {
            out.extend(row.iter().map(|&p| if p == BinaryColor::On { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

fn unreachable(e: Infallible) -> SurfaceError {
    match e {}
}

impl DisplaySurface for FrameBufferSurface {
    type Error = SurfaceError;

    fn begin(&mut self, _bus: &BusConfig) -> Result<(), SurfaceError> {
        self.begin_calls += 1;
        if !self.connected {
            return Err(SurfaceError::NotConnected);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        DrawTarget::clear(&mut self.back, BinaryColor::Off).map_err(unreachable)
    }

    fn draw_text(&mut self, origin: layout::Point, font: FontSize, text: &str) -> Result<(), SurfaceError> {
        graphics::draw_text(&mut self.back, origin, font, text).map_err(unreachable)
    }

    fn draw_line(&mut self, from: layout::Point, to: layout::Point) -> Result<(), SurfaceError> {
        graphics::draw_line(&mut self.back, from, to).map_err(unreachable)
    }

    fn draw_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        graphics::draw_rect(&mut self.back, rect).map_err(unreachable)
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        graphics::fill_rect(&mut self.back, rect).map_err(unreachable)
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.present_calls += 1;
        self.front.copy_from_slice(&self.back.buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_dark() {
        let surface = FrameBufferSurface::new(128, 64);
        assert_eq!(surface.width(), 128);
        assert_eq!(surface.height(), 64);
        assert_eq!(surface.count_on_pixels(), 0);
    }

    #[test]
    fn drawing_is_invisible_until_present() {
        let mut surface = FrameBufferSurface::new(128, 64);
        surface.fill_rect(Rect::new(0, 0, 4, 4)).unwrap();
        assert_eq!(surface.count_on_pixels(), 0);

        surface.present().unwrap();
        assert_eq!(surface.count_on_pixels(), 16);
    }

    #[test]
    fn outline_stays_inside_rect() {
        let mut surface = FrameBufferSurface::new(128, 64);
        surface.draw_rect(Rect::new(10, 60, 108, 4)).unwrap();
        surface.present().unwrap();

        // top + bottom rows fully lit, two middle rows only at the edges
        assert_eq!(surface.count_on_in(Rect::new(10, 60, 108, 4)), 108 * 2 + 2 * 2);
        assert!(!surface.is_on(9, 60));
        assert!(!surface.is_on(118, 60));
    }

    #[test]
    fn text_lands_near_origin() {
        let mut surface = FrameBufferSurface::new(128, 64);
        surface
            .draw_text(layout::Point::new(0, 15), FontSize::Small, "HATA")
            .unwrap();
        surface.present().unwrap();

        assert!(surface.count_on_in(Rect::new(0, 15, 24, 10)) > 0);
        assert_eq!(surface.count_on_in(Rect::new(0, 0, 128, 15)), 0);
    }

    #[test]
    fn off_screen_pixels_are_clipped() {
        let mut surface = FrameBufferSurface::new(16, 8);
        surface
            .draw_text(layout::Point::new(-4, 0), FontSize::Large, "Tiksinmis")
            .unwrap();
        surface.present().unwrap();
        assert!(surface.count_on_pixels() <= 16 * 8);
    }

    #[test]
    fn clear_then_present_blanks() {
        let mut surface = FrameBufferSurface::new(32, 16);
        surface.fill_rect(Rect::new(0, 0, 32, 16)).unwrap();
        surface.present().unwrap();
        surface.clear().unwrap();
        surface.present().unwrap();
        assert_eq!(surface.count_on_pixels(), 0);
    }

    #[test]
    fn disconnected_surface_fails_handshake() {
        let mut surface = FrameBufferSurface::disconnected(128, 64);
        assert_eq!(
            surface.begin(&BusConfig::default()),
            Err(SurfaceError::NotConnected)
        );
        surface.set_connected(true);
        assert_eq!(surface.begin(&BusConfig::default()), Ok(()));
        assert_eq!(surface.begin_calls, 2);
    }

    #[test]
    fn ascii_dump_has_one_line_per_row() {
        let mut surface = FrameBufferSurface::new(4, 2);
        surface.fill_rect(Rect::new(0, 0, 2, 1)).unwrap();
        surface.present().unwrap();
        assert_eq!(surface.to_ascii(), "##..\n....\n");
    }
}

//! Pixel layout for every view the display can show.
//!
//! Each view is computed from scratch into a [`Frame`]: an ordered list of
//! [`DrawCommand`]s for a freshly cleared screen. Nothing is retained between
//! calls, so there is no diffing or dirty-region tracking.
//!
//! # Emotion view (128x64)
//!
//! ```text
//! ┌────────────────────────────┐
//! │Duygu Durumu:               │  header, small font, y=0
//! │────────────────────────────│  separator, y=12
//! │                            │
//! │          Uzgun             │  label, large font, centered, y=25
//! │                            │
//! │       Guven: 42.0%         │  confidence, small font, centered, y=50
//! │ [█████████░░░░░░░░░░░░░░░] │  bar, x=10, y=60, 108x4
//! └────────────────────────────┘
//! ```
//!
//! Centering assumes monospace glyphs: `x = (width - chars * glyph_width) / 2`.
//! Text wider than the screen yields a negative `x` and simply overflows.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::config::{DisplayConfig, SplashConfig};
use crate::labels::translate;

// ============================================================================
// Geometry constants
// ============================================================================

/// Header text of the emotion view.
pub const EMOTION_HEADER: &str = "Duygu Durumu:";

/// Header text of the error view.
pub const ERROR_HEADER: &str = "HATA:";

/// Lines of the waiting view.
pub const WAITING_LINES: (&str, &str) = ("Veri", "Bekleniyor");

/// Horizontal inset of the confidence bar on each side.
pub const BAR_MARGIN: i32 = 10;

/// Height of the confidence bar.
pub const BAR_HEIGHT: u32 = 4;

const SEPARATOR_Y: i32 = 12;
const LABEL_Y: i32 = 25;
const CONFIDENCE_Y: i32 = 50;
const BAR_Y: i32 = 60;

const MESSAGE_X: i32 = 10;
const MESSAGE_LINE1_Y: i32 = 20;
const MESSAGE_LINE2_Y: i32 = 40;

const ERROR_MESSAGE_Y: i32 = 15;

// ============================================================================
// Primitives
// ============================================================================

/// A pixel coordinate. May lie off-screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }
}

/// The two text sizes the layouts use.
///
/// Metrics match the mono fonts the surfaces draw with: a 6x10 font and a
/// 10x20 font spaced out to a 12 px advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    /// 6 px advance, 10 px tall: headers, confidence text, error banner
    Small,
    /// 12 px advance, 20 px tall: emotion label, messages, splash
    Large,
}

impl FontSize {
    /// Horizontal advance per character in pixels.
    pub const fn glyph_width(self) -> i32 {
        match self {
            FontSize::Small => 6,
            FontSize::Large => 12,
        }
    }

    /// Line height in pixels.
    pub const fn glyph_height(self) -> i32 {
        match self {
            FontSize::Small => 10,
            FontSize::Large => 20,
        }
    }
}

/// One drawing primitive issued to a display surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Text whose top-left corner is at `origin`.
    Text {
        /// Top-left of the first glyph
        origin: Point,
        /// Text size
        font: FontSize,
        /// Literal text
        text: String,
    },
    /// 1px line between two points, inclusive.
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
    /// 1px rectangle outline.
    Rect(Rect),
    /// Solid rectangle.
    FilledRect(Rect),
}

/// The commands making up one full-screen redraw.
///
/// Presenting a frame always starts from a cleared surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    /// An empty frame (a blank screen once presented).
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether the frame draws anything.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the text of every `Text` command.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn text(&mut self, origin: Point, font: FontSize, text: &str) {
        self.commands.push(DrawCommand::Text {
            origin,
            font,
            text: String::from(text),
        });
    }

    fn line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn filled_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FilledRect(rect));
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Clamps a confidence score into `[0.0, 1.0]`; NaN becomes `0.0`.
pub fn clamp_confidence(confidence: f32) -> f32 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}

/// Formats the confidence line, e.g. `"Guven: 42.0%"`.
pub fn confidence_text(confidence: f32) -> String {
    let mut text = String::new();
    let _ = write!(text, "Guven: {:.1}%", clamp_confidence(confidence) * 100.0);
    text
}

// ============================================================================
// Layout
// ============================================================================

/// Computes frames for a panel of a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    width: u32,
    height: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(128, 64)
    }
}

impl Layout {
    /// Creates a layout for a `width` x `height` panel.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a layout matching the configured panel.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Panel width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Panel height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// X coordinate that horizontally centers `text` in `font`.
    pub fn centered_x(&self, text: &str, font: FontSize) -> i32 {
        let text_width = text.chars().count() as i32 * font.glyph_width();
        (self.width as i32 - text_width) / 2
    }

    /// Width available to the confidence bar.
    pub fn bar_width(&self) -> u32 {
        (self.width as i32 - 2 * BAR_MARGIN).max(0) as u32
    }

    /// Filled width of the confidence bar, rounded to the nearest pixel.
    ///
    /// Monotonic in `confidence`; 0 at 0.0 and [`bar_width`](Self::bar_width) at 1.0.
    pub fn bar_fill_width(&self, confidence: f32) -> u32 {
        let fill = clamp_confidence(confidence) * self.bar_width() as f32;
        ((fill + 0.5) as u32).min(self.bar_width())
    }

    /// Header, separator, centered label and confidence with bar.
    pub fn emotion_frame(&self, emotion_id: &str, confidence: f32) -> Frame {
        let mut frame = Frame::new();

        frame.text(Point::new(0, 0), FontSize::Small, EMOTION_HEADER);
        frame.line(
            Point::new(0, SEPARATOR_Y),
            Point::new(self.width as i32 - 1, SEPARATOR_Y),
        );

        let label = translate(emotion_id);
        frame.text(
            Point::new(self.centered_x(label, FontSize::Large), LABEL_Y),
            FontSize::Large,
            label,
        );

        let percent = confidence_text(confidence);
        frame.text(
            Point::new(self.centered_x(&percent, FontSize::Small), CONFIDENCE_Y),
            FontSize::Small,
            &percent,
        );

        frame.rect(Rect::new(BAR_MARGIN, BAR_Y, self.bar_width(), BAR_HEIGHT));
        let fill = self.bar_fill_width(confidence);
        if fill > 0 {
            frame.filled_rect(Rect::new(BAR_MARGIN, BAR_Y, fill, BAR_HEIGHT));
        }

        frame
    }

    /// Up to two large lines at fixed positions; absent lines are skipped.
    pub fn message_frame(&self, line1: Option<&str>, line2: Option<&str>) -> Frame {
        let mut frame = Frame::new();
        if let Some(line) = line1 {
            frame.text(Point::new(MESSAGE_X, MESSAGE_LINE1_Y), FontSize::Large, line);
        }
        if let Some(line) = line2 {
            frame.text(Point::new(MESSAGE_X, MESSAGE_LINE2_Y), FontSize::Large, line);
        }
        frame
    }

    /// The "waiting for data" placeholder.
    pub fn waiting_frame(&self) -> Frame {
        self.message_frame(Some(WAITING_LINES.0), Some(WAITING_LINES.1))
    }

    /// `HATA:` banner followed by the literal message, no wrapping.
    pub fn error_frame(&self, message: &str) -> Frame {
        let mut frame = Frame::new();
        frame.text(Point::new(0, 0), FontSize::Small, ERROR_HEADER);
        frame.text(Point::new(0, ERROR_MESSAGE_Y), FontSize::Small, message);
        frame
    }

    /// Branding shown once while the display settles after initialization.
    pub fn splash_frame(&self, splash: &SplashConfig) -> Frame {
        self.message_frame(Some(splash.line1.as_str()), Some(splash.line2.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_at(frame: &Frame, index: usize) -> (Point, FontSize, &str) {
        match &frame.commands()[index] {
            DrawCommand::Text { origin, font, text } => (*origin, *font, text.as_str()),
            other => panic!("expected text, got {:?}", other),
        }
    }

    // =========================================================================
    // Helper Tests
    // =========================================================================

    #[test]
    fn clamp_confidence_bounds() {
        assert_eq!(clamp_confidence(-0.5), 0.0);
        assert_eq!(clamp_confidence(0.25), 0.25);
        assert_eq!(clamp_confidence(1.5), 1.0);
        assert_eq!(clamp_confidence(f32::NAN), 0.0);
        assert_eq!(clamp_confidence(f32::INFINITY), 1.0);
    }

    #[test]
    fn confidence_text_one_decimal() {
        assert_eq!(confidence_text(0.42), "Guven: 42.0%");
        assert_eq!(confidence_text(0.955), "Guven: 95.5%");
        assert_eq!(confidence_text(0.0), "Guven: 0.0%");
        assert_eq!(confidence_text(1.0), "Guven: 100.0%");
    }

    #[test]
    fn confidence_text_clamps() {
        assert_eq!(confidence_text(3.0), "Guven: 100.0%");
        assert_eq!(confidence_text(-1.0), "Guven: 0.0%");
    }

    #[test]
    fn centered_x_uses_glyph_width() {
        let layout = Layout::default();
        // "Uzgun": 5 * 12 = 60 -> (128 - 60) / 2
        assert_eq!(layout.centered_x("Uzgun", FontSize::Large), 34);
        // "Guven: 42.0%": 12 * 6 = 72 -> (128 - 72) / 2
        assert_eq!(layout.centered_x("Guven: 42.0%", FontSize::Small), 28);
    }

    #[test]
    fn centered_x_goes_negative_for_wide_text() {
        let layout = Layout::default();
        // 11 * 12 = 132 -> (128 - 132) / 2 = -2
        assert_eq!(layout.centered_x("Abcdefghijk", FontSize::Large), -2);
    }

    // =========================================================================
    // Bar Tests
    // =========================================================================

    #[test]
    fn bar_fill_endpoints() {
        let layout = Layout::default();
        assert_eq!(layout.bar_width(), 108);
        assert_eq!(layout.bar_fill_width(0.0), 0);
        assert_eq!(layout.bar_fill_width(1.0), 108);
    }

    #[test]
    fn bar_fill_rounds() {
        let layout = Layout::default();
        assert_eq!(layout.bar_fill_width(0.42), 45);
        assert_eq!(layout.bar_fill_width(0.5), 54);
    }

    #[test]
    fn bar_fill_is_monotonic() {
        let layout = Layout::default();
        let mut previous = 0;
        for step in 0..=1000 {
            let fill = layout.bar_fill_width(step as f32 / 1000.0);
            assert!(fill >= previous);
            previous = fill;
        }
        assert_eq!(previous, 108);
    }

    #[test]
    fn bar_fill_clamps_out_of_range() {
        let layout = Layout::default();
        assert_eq!(layout.bar_fill_width(-0.3), 0);
        assert_eq!(layout.bar_fill_width(7.0), 108);
        assert_eq!(layout.bar_fill_width(f32::NAN), 0);
    }

    // =========================================================================
    // View Tests
    // =========================================================================

    #[test]
    fn emotion_frame_layout() {
        let frame = Layout::default().emotion_frame("sad", 0.42);
        let cmds = frame.commands();
        assert_eq!(cmds.len(), 6);

        assert_eq!(text_at(&frame, 0), (Point::new(0, 0), FontSize::Small, "Duygu Durumu:"));
        assert_eq!(
            cmds[1],
            DrawCommand::Line {
                from: Point::new(0, 12),
                to: Point::new(127, 12)
            }
        );
        assert_eq!(text_at(&frame, 2), (Point::new(34, 25), FontSize::Large, "Uzgun"));
        assert_eq!(text_at(&frame, 3), (Point::new(28, 50), FontSize::Small, "Guven: 42.0%"));
        assert_eq!(cmds[4], DrawCommand::Rect(Rect::new(10, 60, 108, 4)));
        assert_eq!(cmds[5], DrawCommand::FilledRect(Rect::new(10, 60, 45, 4)));
    }

    #[test]
    fn emotion_frame_zero_confidence_has_no_fill() {
        let frame = Layout::default().emotion_frame("happy", 0.0);
        assert!(!frame
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::FilledRect(_))));
        assert!(frame
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::Rect(_))));
    }

    #[test]
    fn emotion_frame_unknown_id_uses_fallback() {
        let frame = Layout::default().emotion_frame("bored", 0.5);
        assert!(frame.texts().any(|t| t == "Bilinmeyen"));
    }

    #[test]
    fn message_frame_positions() {
        let frame = Layout::default().message_frame(Some("Hello"), Some("World"));
        assert_eq!(text_at(&frame, 0), (Point::new(10, 20), FontSize::Large, "Hello"));
        assert_eq!(text_at(&frame, 1), (Point::new(10, 40), FontSize::Large, "World"));
    }

    #[test]
    fn message_frame_skips_absent_lines() {
        let layout = Layout::default();
        assert!(layout.message_frame(None, None).is_empty());

        let only_second = layout.message_frame(None, Some("World"));
        assert_eq!(only_second.commands().len(), 1);
        assert_eq!(text_at(&only_second, 0).0, Point::new(10, 40));
    }

    #[test]
    fn message_frame_keeps_empty_but_present_line() {
        let frame = Layout::default().message_frame(Some(""), None);
        assert_eq!(frame.commands().len(), 1);
    }

    #[test]
    fn waiting_frame_lines() {
        let frame = Layout::default().waiting_frame();
        let texts: Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["Veri", "Bekleniyor"]);
    }

    #[test]
    fn error_frame_layout() {
        let frame = Layout::default().error_frame("sensor timeout");
        assert_eq!(text_at(&frame, 0), (Point::new(0, 0), FontSize::Small, "HATA:"));
        assert_eq!(text_at(&frame, 1), (Point::new(0, 15), FontSize::Small, "sensor timeout"));
    }

    #[test]
    fn error_frame_does_not_truncate() {
        let long = "x".repeat(80);
        let frame = Layout::default().error_frame(&long);
        assert_eq!(text_at(&frame, 1).2.len(), 80);
    }

    #[test]
    fn splash_frame_uses_config() {
        let frame = Layout::default().splash_frame(&SplashConfig::default());
        let texts: Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["Deneyap", "Kamera"]);
        assert_eq!(text_at(&frame, 0).0, Point::new(10, 20));
    }

    #[test]
    fn layout_from_config_tracks_width() {
        let config = DisplayConfig::default().with_size(96, 16);
        let layout = Layout::from_config(&config);
        assert_eq!(layout.bar_width(), 76);
        let frame = layout.emotion_frame("happy", 1.0);
        assert_eq!(
            frame.commands()[1],
            DrawCommand::Line {
                from: Point::new(0, 12),
                to: Point::new(95, 12)
            }
        );
    }
}

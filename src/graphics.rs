//! Rasterizes layout primitives with `embedded-graphics`.
//!
//! Both the SSD1306 surface and the in-memory framebuffer draw through these
//! helpers, so text metrics match the layout engine's glyph widths:
//!
//! | [`FontSize`] | Font | Advance |
//! |--------------|------|---------|
//! | `Small` | `FONT_6X10` | 6 px |
//! | `Large` | `FONT_10X20` + 2 px spacing | 12 px |

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::layout::{self, FontSize, Rect};

/// Font used for [`FontSize::Small`].
pub const SMALL_FONT: MonoFont<'static> = FONT_6X10;

/// Font used for [`FontSize::Large`], spaced out to a 12 px advance.
pub const LARGE_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 2,
    ..FONT_10X20
};

/// The mono font backing a layout font size.
pub fn mono_font(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Small => &SMALL_FONT,
        FontSize::Large => &LARGE_FONT,
    }
}

fn point(p: layout::Point) -> Point {
    Point::new(p.x, p.y)
}

fn rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(point(rect.origin), Size::new(rect.width, rect.height))
}

/// Draws `text` with its top-left corner at `origin`.
pub fn draw_text<D>(target: &mut D, origin: layout::Point, font: FontSize, text: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(mono_font(font), BinaryColor::On);
    Text::with_baseline(text, point(origin), style, Baseline::Top).draw(target)?;
    Ok(())
}

/// Draws a 1px line.
pub fn draw_line<D>(target: &mut D, from: layout::Point, to: layout::Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(point(from), point(to))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
}

/// Draws a 1px outline inside `rect`.
pub fn draw_rect<D>(target: &mut D, rect: Rect) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    rectangle(rect)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
}

/// Fills `rect`.
pub fn fill_rect<D>(target: &mut D, rect: Rect) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    rectangle(rect)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_advances_match_layout() {
        for size in [FontSize::Small, FontSize::Large] {
            let font = mono_font(size);
            let advance = font.character_size.width + font.character_spacing;
            assert_eq!(advance as i32, size.glyph_width());
        }
    }

    #[test]
    fn font_heights_match_layout() {
        for size in [FontSize::Small, FontSize::Large] {
            assert_eq!(mono_font(size).character_size.height as i32, size.glyph_height());
        }
    }
}

//! SSD1306 OLED surface for ESP32.
//!
//! Draws into the driver's buffered graphics mode and pushes the whole
//! buffer to the panel on [`present`](DisplaySurface::present).
//!
//! # Wiring
//!
//! - SDA → GPIO4 (D10)
//! - SCL → GPIO15 (D11)
//! - VCC → 3.3V
//! - GND → GND

use display_interface::DisplayError;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use esp_idf_hal::i2c::I2cDriver;
use log::debug;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use crate::config::BusConfig;
use crate::graphics;
use crate::layout::{self, FontSize, Rect};
use crate::traits::DisplaySurface;

/// SSD1306 display type alias for cleaner code.
type DisplayDriver<'d> = Ssd1306<
    I2CInterface<I2cDriver<'d>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// SSD1306 128x64 OLED on an ESP32 I2C bus.
///
/// Construction only wraps the bus; the controller is configured by
/// [`begin`](DisplaySurface::begin).
pub struct Ssd1306Surface<'d> {
    display: DisplayDriver<'d>,
}

impl<'d> Ssd1306Surface<'d> {
    /// Wraps an I2C driver already set up on the configured pins.
    pub fn new(i2c: I2cDriver<'d>, bus: &BusConfig) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, bus.address);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self { display }
    }
}

impl DisplaySurface for Ssd1306Surface<'_> {
    type Error = DisplayError;

    fn begin(&mut self, bus: &BusConfig) -> Result<(), DisplayError> {
        debug!("SSD1306 handshake at 0x{:02X}", bus.address);
        self.display.init()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear(BinaryColor::Off)
    }

    fn draw_text(&mut self, origin: layout::Point, font: FontSize, text: &str) -> Result<(), DisplayError> {
        graphics::draw_text(&mut self.display, origin, font, text)
    }

    fn draw_line(&mut self, from: layout::Point, to: layout::Point) -> Result<(), DisplayError> {
        graphics::draw_line(&mut self.display, from, to)
    }

    fn draw_rect(&mut self, rect: Rect) -> Result<(), DisplayError> {
        graphics::draw_rect(&mut self.display, rect)
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), DisplayError> {
        graphics::fill_rect(&mut self.display, rect)
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.display.flush()
    }
}

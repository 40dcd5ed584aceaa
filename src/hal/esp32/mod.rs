//! Deneyap Kart (ESP32) hardware abstraction layer for the emotion display.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32 on a Deneyap Kart / Deneyap Kamera board
//! - **Display**: SSD1306 128x64 OLED (I2C)
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for GPIO assignments.

#[cfg(feature = "display")]
mod display;
#[cfg(feature = "display")]
pub use display::Ssd1306Surface;

/// Pin assignments for the OLED header.
///
/// These constants match the defaults in [`BusConfig`](crate::config::BusConfig).
pub mod pins {
    // =========================================================================
    // I2C Display (SSD1306)
    // =========================================================================

    /// I2C data line (D10 on the Deneyap header)
    pub const I2C_SDA: i32 = 4;

    /// I2C clock line (D11 on the Deneyap header)
    pub const I2C_SCL: i32 = 15;

    /// Default I2C address for SSD1306 OLED
    pub const OLED_I2C_ADDR: u8 = 0x3C;

    /// I2C bus speed
    pub const I2C_BAUDRATE_HZ: u32 = 400_000;
}

//! Display configuration shared by the firmware and desktop tests.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use emotion_oled::config::{BusConfig, Config, DisplayConfig};
//!
//! // Use defaults (128x64 SSD1306 at 0x3C, 2 s splash)
//! let config = Config::default();
//! assert!(config.validate().is_ok());
//!
//! // Or customize
//! let config = Config::default()
//!     .with_display(DisplayConfig::default().with_settle_ms(500))
//!     .with_bus(BusConfig::default().with_address(0x3D));
//! ```

use core::fmt;
use heapless::String as HString;

/// Maximum length for short config strings (splash lines)
pub const MAX_SHORT_STRING: usize = 32;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    // Take only what fits
    let take = s.len().min(MAX_SHORT_STRING);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, c)| i + c.len_utf8() <= take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Errors
// ============================================================================

/// Reasons a [`Config`] is rejected by [`Config::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyGeometry,
    /// I2C address is reserved or does not fit in 7 bits.
    InvalidAddress(u8),
    /// SDA and SCL are assigned the same pin.
    PinConflict(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGeometry => write!(f, "display width/height must be > 0"),
            ConfigError::InvalidAddress(addr) => {
                write!(f, "I2C address 0x{:02X} is not a usable 7-bit address", addr)
            }
            ConfigError::PinConflict(pin) => {
                write!(f, "SDA and SCL both assigned to GPIO{}", pin)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

// ============================================================================
// Main Config
// ============================================================================

/// Complete display configuration
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Panel geometry and timing
    pub display: DisplayConfig,
    /// I2C wiring of the panel
    pub bus: BusConfig,
    /// Text shown once after the first successful initialization
    pub splash: SplashConfig,
}

impl Config {
    /// Set display configuration
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Set bus configuration
    pub fn with_bus(mut self, bus: BusConfig) -> Self {
        self.bus = bus;
        self
    }

    /// Set splash configuration
    pub fn with_splash(mut self, splash: SplashConfig) -> Self {
        self.splash = splash;
        self
    }

    /// Checks the invariants the session and layout rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::EmptyGeometry);
        }
        // 0x00-0x07 and 0x78-0x7F are reserved; this also catches 8-bit wire addresses
        if !(0x08..=0x77).contains(&self.bus.address) {
            return Err(ConfigError::InvalidAddress(self.bus.address));
        }
        if self.bus.sda_pin == self.bus.scl_pin {
            return Err(ConfigError::PinConflict(self.bus.sda_pin));
        }
        Ok(())
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// Panel geometry and initialization timing
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Panel width in pixels
    pub width: u32,
    /// Panel height in pixels
    pub height: u32,
    /// How long the splash stays up after the first initialization (milliseconds)
    pub settle_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            settle_ms: 2000,
        }
    }
}

impl DisplayConfig {
    /// Set the panel size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the post-initialization settle delay
    pub fn with_settle_ms(mut self, ms: u32) -> Self {
        self.settle_ms = ms;
        self
    }
}

// ============================================================================
// Bus Config
// ============================================================================

/// I2C wiring for the SSD1306
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusConfig {
    /// Data line GPIO
    pub sda_pin: i32,
    /// Clock line GPIO
    pub scl_pin: i32,
    /// 7-bit device address
    pub address: u8,
    /// Bus clock in Hz
    pub baudrate_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        // D10 / D11 on the Deneyap Kart header
        Self {
            sda_pin: 4,
            scl_pin: 15,
            address: 0x3C,
            baudrate_hz: 400_000,
        }
    }
}

impl BusConfig {
    /// Set the SDA/SCL pins
    pub fn with_pins(mut self, sda_pin: i32, scl_pin: i32) -> Self {
        self.sda_pin = sda_pin;
        self.scl_pin = scl_pin;
        self
    }

    /// Set the device address
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the bus clock
    pub fn with_baudrate_hz(mut self, hz: u32) -> Self {
        self.baudrate_hz = hz;
        self
    }
}

// ============================================================================
// Splash Config
// ============================================================================

/// Two lines of branding drawn in the large font during initialization
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplashConfig {
    /// Upper line
    pub line1: ShortString,
    /// Lower line
    pub line2: ShortString,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            line1: short_string("Deneyap"),
            line2: short_string("Kamera"),
        }
    }
}

impl SplashConfig {
    /// Set both splash lines
    pub fn with_lines(mut self, line1: &str, line2: &str) -> Self {
        self.line1 = short_string(line1);
        self.line2 = short_string(line2);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.display.width, 128);
        assert_eq!(config.display.height, 64);
        assert_eq!(config.display.settle_ms, 2000);
        assert_eq!(config.bus.address, 0x3C);
        assert_eq!(config.splash.line1.as_str(), "Deneyap");
        assert_eq!(config.splash.line2.as_str(), "Kamera");
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn builders_apply() {
        let config = Config::default()
            .with_display(DisplayConfig::default().with_size(128, 32).with_settle_ms(0))
            .with_bus(BusConfig::default().with_pins(21, 22).with_address(0x3D))
            .with_splash(SplashConfig::default().with_lines("Hello", "World"));

        assert_eq!(config.display.height, 32);
        assert_eq!(config.display.settle_ms, 0);
        assert_eq!(config.bus.sda_pin, 21);
        assert_eq!(config.bus.scl_pin, 22);
        assert_eq!(config.bus.address, 0x3D);
        assert_eq!(config.splash.line1.as_str(), "Hello");
    }

    #[test]
    fn validate_rejects_zero_geometry() {
        let config = Config::default().with_display(DisplayConfig::default().with_size(0, 64));
        assert_eq!(config.validate(), Err(ConfigError::EmptyGeometry));
    }

    #[test]
    fn validate_rejects_eight_bit_address() {
        let config = Config::default().with_bus(BusConfig::default().with_address(0x78));
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress(0x78)));
    }

    #[test]
    fn validate_rejects_low_reserved_address() {
        for address in [0x00, 0x07] {
            let config = Config::default().with_bus(BusConfig::default().with_address(address));
            assert_eq!(config.validate(), Err(ConfigError::InvalidAddress(address)));
        }
    }

    #[test]
    fn validate_accepts_usable_address_range() {
        for address in [0x08, 0x3C, 0x3D, 0x77] {
            let config = Config::default().with_bus(BusConfig::default().with_address(address));
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_shared_pin() {
        let config = Config::default().with_bus(BusConfig::default().with_pins(5, 5));
        assert_eq!(config.validate(), Err(ConfigError::PinConflict(5)));
    }

    #[test]
    fn short_string_truncation() {
        let long = "a".repeat(100);
        let s = short_string(&long);
        assert_eq!(s.len(), MAX_SHORT_STRING);
    }

    #[test]
    fn short_string_keeps_utf8_boundary() {
        // 31 ASCII bytes followed by a two-byte character
        let input = alloc::format!("{}ü", "a".repeat(31));
        let s = short_string(&input);
        assert_eq!(s.len(), 31);
    }
}

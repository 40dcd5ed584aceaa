//! Deneyap Kamera emotion display firmware.
//!
//! This is the main entry point for the physical device. It:
//! - Brings up the SSD1306 OLED on the I2C header
//! - Shows the waiting screen until the first result arrives
//! - Reads newline-delimited JSON view requests from the serial console
//!   and renders each one
//!
//! # Console Protocol
//!
//! ```text
//! {"emotion": "happy", "confidence": 0.95}
//! {"view": "message", "line1": "Merhaba", "line2": "Dunya"}
//! {"view": "waiting"}
//! {"view": "error", "message": "sensor timeout"}
//! {"view": "clear"}
//! ```
//!
//! # Build
//!
//! ```bash
//! cargo build --release --features display --bin esp32_main
//! espflash flash --monitor target/xtensa-esp32-espidf/release/esp32_main
//! ```

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use emotion_oled::console::{dispatch_line, LineBuffer};
use emotion_oled::hal::esp32::{pins, Ssd1306Surface};
use emotion_oled::{BusConfig, Config, EmotionDisplay};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use log::{info, warn};

/// Console poll interval while no input is pending.
const IDLE_POLL_MS: u64 = 50;

// The GPIO fields taken below are fixed at compile time; keep them in step
// with the pin constants the bus config is built from.
const _: () = assert!(pins::I2C_SDA == 4 && pins::I2C_SCL == 15);

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("emotion-oled starting");

    // =========================================================================
    // Configuration
    // =========================================================================
    let config = Config::default().with_bus(
        BusConfig::default()
            .with_pins(pins::I2C_SDA, pins::I2C_SCL)
            .with_address(pins::OLED_I2C_ADDR)
            .with_baudrate_hz(pins::I2C_BAUDRATE_HZ),
    );
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize Display (SSD1306 on GPIO4/15)
    // =========================================================================
    // Driver creation only claims the peripheral and pins; panel faults
    // surface in `begin()` and are retried per request.
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio4,  // SDA, pins::I2C_SDA
        peripherals.pins.gpio15, // SCL, pins::I2C_SCL
        &I2cConfig::new().baudrate(config.bus.baudrate_hz.Hz()),
    )
    .context("I2C driver setup failed")?;
    let surface = Ssd1306Surface::new(i2c, &config.bus);
    let mut display = EmotionDisplay::new(surface, FreeRtos, config);

    if !display.init() {
        warn!("OLED not responding, will retry on the next request");
    }
    display.show_waiting();

    // =========================================================================
    // Console Loop
    // =========================================================================
    info!("waiting for view requests on the console");

    let stdin = io::stdin();
    let mut lines = LineBuffer::new();
    loop {
        match lines.poll(&mut stdin.lock()) {
            Ok(Some(line)) => {
                dispatch_line(&mut display, &line);
            }
            Ok(None) => {
                thread::sleep(Duration::from_millis(IDLE_POLL_MS));
            }
            Err(e) => {
                warn!("console read failed: {}", e);
                thread::sleep(Duration::from_millis(IDLE_POLL_MS));
            }
        }
    }
}

//! Lazy, one-time display initialization.
//!
//! [`DisplaySession`] is the single owner of the display surface. It starts
//! [`Uninitialized`](SessionState::Uninitialized) and moves to
//! [`Ready`](SessionState::Ready) the first time [`ensure_ready`] succeeds.
//! A failed handshake leaves it uninitialized so the next call retries, with
//! no backoff and no attempt limit. There is no way back from `Ready`.
//!
//! On the successful handshake the session draws the splash, presents it and
//! blocks for the configured settle delay before returning.
//!
//! # Example
//!
//! ```rust
//! use emotion_oled::config::Config;
//! use emotion_oled::hal::{MockDelay, MockSurface};
//! use emotion_oled::session::DisplaySession;
//!
//! let mut session = DisplaySession::new(MockSurface::new(), MockDelay::new(), Config::default());
//! assert!(!session.is_ready());
//!
//! assert!(session.ensure_ready());
//! assert!(session.ensure_ready()); // no second handshake
//! assert_eq!(session.surface().begin_calls, 1);
//! assert_eq!(session.delay().total_ms(), 2000);
//! ```
//!
//! [`ensure_ready`]: DisplaySession::ensure_ready

use embedded_hal::delay::DelayNs;
use log::{debug, error, info};

use crate::config::Config;
use crate::layout::{Frame, Layout};
use crate::traits::DisplaySurface;

/// Initialization state of the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The handshake has not succeeded yet.
    #[default]
    Uninitialized,
    /// The panel accepted the handshake. Terminal.
    Ready,
}

/// Owns the display surface and its initialization state.
pub struct DisplaySession<S, D> {
    surface: S,
    delay: D,
    config: Config,
    state: SessionState,
    init_attempts: u32,
}

impl<S, D> DisplaySession<S, D>
where
    S: DisplaySurface,
    D: DelayNs,
{
    /// Creates an uninitialized session. No bus traffic happens here.
    pub fn new(surface: S, delay: D, config: Config) -> Self {
        Self {
            surface,
            delay,
            config,
            state: SessionState::Uninitialized,
            init_attempts: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the display has been initialized.
    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    /// Number of handshakes attempted so far.
    pub fn init_attempts(&self) -> u32 {
        self.init_attempts
    }

    /// The session's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read access to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Read access to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Consumes the session, returning the surface and delay provider.
    pub fn into_parts(self) -> (S, D) {
        (self.surface, self.delay)
    }

    /// Initializes the display if it is not ready yet.
    ///
    /// Returns `true` when the display is ready. Failure is logged and
    /// reported as `false`; it never panics.
    pub fn ensure_ready(&mut self) -> bool {
        if self.is_ready() {
            return true;
        }

        self.init_attempts += 1;
        info!(
            "initializing OLED (SDA={}, SCL={}, addr=0x{:02X}), attempt {}",
            self.config.bus.sda_pin, self.config.bus.scl_pin, self.config.bus.address,
            self.init_attempts
        );

        if let Err(e) = self.surface.begin(&self.config.bus) {
            error!("OLED initialization failed: {:?}", e);
            return false;
        }

        self.state = SessionState::Ready;

        let splash = Layout::from_config(&self.config.display).splash_frame(&self.config.splash);
        if let Err(e) = self.present(&splash) {
            error!("splash presentation failed: {:?}", e);
        }

        info!("OLED initialized");
        debug!("holding splash for {} ms", self.config.display.settle_ms);
        self.delay.delay_ms(self.config.display.settle_ms);

        true
    }

    /// Clears the surface, draws `frame` and presents it.
    ///
    /// Does not check readiness; callers go through [`ensure_ready`](Self::ensure_ready).
    pub fn present(&mut self, frame: &Frame) -> Result<(), S::Error> {
        self.surface.clear()?;
        for command in frame {
            self.surface.draw(command)?;
        }
        self.surface.present()
    }

    /// Presents a blank surface.
    pub fn blank(&mut self) -> Result<(), S::Error> {
        self.present(&Frame::new())
    }
}

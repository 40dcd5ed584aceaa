//! Caller-facing render operations.
//!
//! [`EmotionDisplay`] pairs a [`DisplaySession`] with a [`Layout`]. Every
//! view operation first makes sure the display is initialized, then draws
//! the whole frame and presents it. Nothing is drawn when initialization
//! fails; the next call tries again.
//!
//! # Example
//!
//! ```rust
//! use emotion_oled::{Config, EmotionDisplay, RenderOutcome, RenderRequest};
//! use emotion_oled::hal::{MockDelay, MockSurface};
//!
//! let mut display = EmotionDisplay::new(MockSurface::new(), MockDelay::new(), Config::default());
//!
//! // Clearing never forces initialization.
//! assert_eq!(display.clear(), RenderOutcome::NotReady);
//!
//! let outcome = display.render(&RenderRequest::Error { message: "sensor timeout" });
//! assert_eq!(outcome, RenderOutcome::Presented);
//! assert_eq!(display.session().surface().last_texts(), ["HATA:", "sensor timeout"]);
//! ```

use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use crate::config::Config;
use crate::labels::translate;
use crate::layout::{clamp_confidence, Frame, Layout};
use crate::session::DisplaySession;
use crate::traits::DisplaySurface;

/// A view to show, borrowed from the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderRequest<'a> {
    /// Localized emotion label with confidence text and bar.
    Emotion {
        /// Canonical emotion id, e.g. `"happy"`.
        emotion_id: &'a str,
        /// Confidence score, nominally in `[0.0, 1.0]`.
        confidence: f32,
    },
    /// Up to two large lines of free text.
    Message {
        /// First line, if any.
        line1: Option<&'a str>,
        /// Second line, if any.
        line2: Option<&'a str>,
    },
    /// The "Veri / Bekleniyor" placeholder.
    Waiting,
    /// `HATA:` banner and a message.
    Error {
        /// Message shown verbatim under the banner.
        message: &'a str,
    },
}

/// What happened to a render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The frame reached the panel.
    Presented,
    /// The display could not be initialized; nothing was drawn.
    NotReady,
    /// The surface reported an error while drawing or presenting.
    Failed,
}

impl RenderOutcome {
    /// Whether the frame reached the panel.
    pub fn is_presented(self) -> bool {
        self == RenderOutcome::Presented
    }
}

/// The emotion display: lazy initialization plus the view operations.
pub struct EmotionDisplay<S, D> {
    session: DisplaySession<S, D>,
    layout: Layout,
}

impl<S, D> EmotionDisplay<S, D>
where
    S: DisplaySurface,
    D: DelayNs,
{
    /// Creates a display. The panel is not touched until the first view.
    pub fn new(surface: S, delay: D, config: Config) -> Self {
        Self::from_session(DisplaySession::new(surface, delay, config))
    }

    /// Wraps an existing session.
    pub fn from_session(session: DisplaySession<S, D>) -> Self {
        let layout = Layout::from_config(&session.config().display);
        Self { session, layout }
    }

    /// The underlying session.
    pub fn session(&self) -> &DisplaySession<S, D> {
        &self.session
    }

    /// Mutable access to the underlying session.
    pub fn session_mut(&mut self) -> &mut DisplaySession<S, D> {
        &mut self.session
    }

    /// The layout used for every view.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Initializes the display now instead of on the first view.
    pub fn init(&mut self) -> bool {
        self.session.ensure_ready()
    }

    /// Shows the localized label for `emotion_id` with its confidence.
    pub fn show_emotion(&mut self, emotion_id: &str, confidence: f32) -> RenderOutcome {
        if !self.prepare() {
            return RenderOutcome::NotReady;
        }
        info!(
            "showing emotion {} ({}), confidence {:.1}%",
            emotion_id,
            translate(emotion_id),
            clamp_confidence(confidence) * 100.0
        );
        let frame = self.layout.emotion_frame(emotion_id, confidence);
        self.present(&frame)
    }

    /// Shows up to two lines of text. `None` lines are left blank.
    pub fn show_message(&mut self, line1: Option<&str>, line2: Option<&str>) -> RenderOutcome {
        if !self.prepare() {
            return RenderOutcome::NotReady;
        }
        info!("showing message {:?} / {:?}", line1, line2);
        let frame = self.layout.message_frame(line1, line2);
        self.present(&frame)
    }

    /// Shows the waiting placeholder.
    pub fn show_waiting(&mut self) -> RenderOutcome {
        if !self.prepare() {
            return RenderOutcome::NotReady;
        }
        info!("showing waiting screen");
        let frame = self.layout.waiting_frame();
        self.present(&frame)
    }

    /// Shows the error banner with `message`.
    pub fn show_error(&mut self, message: &str) -> RenderOutcome {
        if !self.prepare() {
            return RenderOutcome::NotReady;
        }
        info!("showing error: {}", message);
        let frame = self.layout.error_frame(message);
        self.present(&frame)
    }

    /// Blanks the panel. Does nothing if the display was never initialized.
    pub fn clear(&mut self) -> RenderOutcome {
        if !self.session.is_ready() {
            return RenderOutcome::NotReady;
        }
        match self.session.blank() {
            Ok(()) => RenderOutcome::Presented,
            Err(e) => {
                error!("clearing OLED failed: {:?}", e);
                RenderOutcome::Failed
            }
        }
    }

    /// Shows any view.
    pub fn render(&mut self, request: &RenderRequest<'_>) -> RenderOutcome {
        match *request {
            RenderRequest::Emotion {
                emotion_id,
                confidence,
            } => self.show_emotion(emotion_id, confidence),
            RenderRequest::Message { line1, line2 } => self.show_message(line1, line2),
            RenderRequest::Waiting => self.show_waiting(),
            RenderRequest::Error { message } => self.show_error(message),
        }
    }

    fn prepare(&mut self) -> bool {
        if self.session.is_ready() {
            return true;
        }
        warn!("OLED not initialized, initializing now");
        self.session.ensure_ready()
    }

    fn present(&mut self, frame: &Frame) -> RenderOutcome {
        match self.session.present(frame) {
            Ok(()) => RenderOutcome::Presented,
            Err(e) => {
                error!("OLED render failed: {:?}", e);
                RenderOutcome::Failed
            }
        }
    }
}

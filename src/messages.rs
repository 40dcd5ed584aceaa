//! Message types for driving the display from upstream services.
//!
//! The recognizer posts a bare [`EmotionEvent`]; anything that needs the other
//! views sends a [`ViewRequest`] tagged with a `view` field.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "json")]
//! # {
//! use emotion_oled::messages::{parse_view_request, ViewRequest};
//!
//! let req = parse_view_request(r#"{"view": "error", "message": "sensor timeout"}"#).unwrap();
//! assert_eq!(req, ViewRequest::Error { message: "sensor timeout".into() });
//! # }
//! ```

use alloc::string::String;

use embedded_hal::delay::DelayNs;
use serde::{Deserialize, Serialize};

use crate::renderer::{EmotionDisplay, RenderOutcome, RenderRequest};
use crate::traits::DisplaySurface;

// ============================================================================
// Message Types
// ============================================================================

/// A classification result from the recognizer.
///
/// # JSON Examples
///
/// ```json
/// {"emotion": "happy", "confidence": 0.95}
/// {"emotion": "neutral"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionEvent {
    /// Canonical emotion id.
    pub emotion: String,
    /// Confidence in `[0.0, 1.0]`; `0.0` when omitted.
    #[serde(default)]
    pub confidence: f32,
}

impl EmotionEvent {
    /// Creates an event.
    pub fn new(emotion: &str, confidence: f32) -> Self {
        Self {
            emotion: String::from(emotion),
            confidence,
        }
    }

    /// Borrows the event as an emotion view.
    pub fn as_render_request(&self) -> RenderRequest<'_> {
        RenderRequest::Emotion {
            emotion_id: &self.emotion,
            confidence: self.confidence,
        }
    }
}

/// Any display operation, as an owned message.
///
/// # JSON Examples
///
/// ```json
/// {"view": "emotion", "emotion": "sad", "confidence": 0.42}
/// {"view": "message", "line1": "Merhaba"}
/// {"view": "waiting"}
/// {"view": "error", "message": "sensor timeout"}
/// {"view": "clear"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewRequest {
    /// Show an emotion label with confidence.
    Emotion {
        /// Canonical emotion id.
        emotion: String,
        /// Confidence in `[0.0, 1.0]`; `0.0` when omitted.
        #[serde(default)]
        confidence: f32,
    },
    /// Show up to two lines of text.
    Message {
        /// First line.
        #[serde(default)]
        line1: Option<String>,
        /// Second line.
        #[serde(default)]
        line2: Option<String>,
    },
    /// Show the waiting placeholder.
    Waiting,
    /// Show the error banner.
    Error {
        /// Message under the banner.
        message: String,
    },
    /// Blank the panel.
    Clear,
}

impl From<EmotionEvent> for ViewRequest {
    fn from(event: EmotionEvent) -> Self {
        ViewRequest::Emotion {
            emotion: event.emotion,
            confidence: event.confidence,
        }
    }
}

impl ViewRequest {
    /// Borrows the request as a render request. `Clear` has none.
    pub fn as_render_request(&self) -> Option<RenderRequest<'_>> {
        match self {
            ViewRequest::Emotion {
                emotion,
                confidence,
            } => Some(RenderRequest::Emotion {
                emotion_id: emotion,
                confidence: *confidence,
            }),
            ViewRequest::Message { line1, line2 } => Some(RenderRequest::Message {
                line1: line1.as_deref(),
                line2: line2.as_deref(),
            }),
            ViewRequest::Waiting => Some(RenderRequest::Waiting),
            ViewRequest::Error { message } => Some(RenderRequest::Error { message }),
            ViewRequest::Clear => None,
        }
    }

    /// Runs the request against `display`.
    pub fn apply<S, D>(&self, display: &mut EmotionDisplay<S, D>) -> RenderOutcome
    where
        S: DisplaySurface,
        D: DelayNs,
    {
        match self.as_render_request() {
            Some(request) => display.render(&request),
            None => display.clear(),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a bare emotion event.
#[cfg(feature = "json")]
pub fn parse_emotion_event(json: &str) -> Option<EmotionEvent> {
    serde_json::from_str(json).ok()
}

/// Parses a view request.
///
/// An object without a `view` key is read as a bare [`EmotionEvent`]. An
/// object with an unknown `view` is rejected even if it carries an emotion.
#[cfg(feature = "json")]
pub fn parse_view_request(json: &str) -> Option<ViewRequest> {
    let value: serde_json::Value = serde_json::from_str(json).ok()?;
    if value.get("view").is_some() {
        serde_json::from_value(value).ok()
    } else {
        serde_json::from_value::<EmotionEvent>(value)
            .ok()
            .map(ViewRequest::from)
    }
}

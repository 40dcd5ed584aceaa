//! Emotion label translation.
//!
//! The classifier reports canonical English identifiers (`"happy"`, `"sad"`, ...).
//! The display shows short Turkish labels from a fixed table. Lookup is an
//! exact, case-sensitive match; anything unrecognized falls back to
//! [`UNKNOWN_LABEL`].
//!
//! # Example
//!
//! ```
//! use emotion_oled::labels::translate;
//!
//! assert_eq!(translate("happy"), "Mutlu");
//! assert_eq!(translate("Happy"), "Bilinmeyen");
//! assert_eq!(translate("xyz"), "Bilinmeyen");
//! ```

/// One entry of the translation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmotionLabel {
    /// Identifier produced by the classifier.
    pub canonical_id: &'static str,
    /// Text drawn on the display.
    pub display_text: &'static str,
}

impl EmotionLabel {
    const fn new(canonical_id: &'static str, display_text: &'static str) -> Self {
        Self {
            canonical_id,
            display_text,
        }
    }
}

/// Entry used when an identifier is not in [`EMOTION_LABELS`].
pub const UNKNOWN_LABEL: EmotionLabel = EmotionLabel::new("unknown", "Bilinmeyen");

/// The translation table, in lookup order.
pub const EMOTION_LABELS: &[EmotionLabel] = &[
    EmotionLabel::new("happy", "Mutlu"),
    EmotionLabel::new("sad", "Uzgun"),
    EmotionLabel::new("angry", "Kizgin"),
    EmotionLabel::new("neutral", "Notr"),
    EmotionLabel::new("surprise", "Saskin"),
    EmotionLabel::new("fear", "Korkmus"),
    EmotionLabel::new("disgust", "Tiksinmis"),
    UNKNOWN_LABEL,
];

/// Returns the table entry for `emotion_id`, if any.
pub fn lookup(emotion_id: &str) -> Option<&'static EmotionLabel> {
    EMOTION_LABELS
        .iter()
        .find(|label| label.canonical_id == emotion_id)
}

/// Translates a canonical emotion identifier into its display text.
///
/// Never fails: unknown identifiers yield [`UNKNOWN_LABEL`]'s text.
pub fn translate(emotion_id: &str) -> &'static str {
    lookup(emotion_id)
        .unwrap_or(&UNKNOWN_LABEL)
        .display_text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_known_ids() {
        assert_eq!(translate("happy"), "Mutlu");
        assert_eq!(translate("sad"), "Uzgun");
        assert_eq!(translate("angry"), "Kizgin");
        assert_eq!(translate("neutral"), "Notr");
        assert_eq!(translate("surprise"), "Saskin");
        assert_eq!(translate("fear"), "Korkmus");
        assert_eq!(translate("disgust"), "Tiksinmis");
        assert_eq!(translate("unknown"), "Bilinmeyen");
    }

    #[test]
    fn translate_every_table_entry() {
        for label in EMOTION_LABELS {
            assert_eq!(translate(label.canonical_id), label.display_text);
        }
    }

    #[test]
    fn translate_falls_back_for_unrecognized() {
        assert_eq!(translate("xyz"), "Bilinmeyen");
        assert_eq!(translate(""), "Bilinmeyen");
        assert_eq!(translate("happy "), "Bilinmeyen");
    }

    #[test]
    fn translate_is_case_sensitive() {
        assert_eq!(translate("HAPPY"), "Bilinmeyen");
        assert_eq!(translate("Sad"), "Bilinmeyen");
    }

    #[test]
    fn lookup_returns_entry() {
        let label = lookup("fear").unwrap();
        assert_eq!(label.canonical_id, "fear");
        assert_eq!(label.display_text, "Korkmus");
        assert!(lookup("calm").is_none());
    }

    #[test]
    fn table_has_no_duplicate_ids() {
        for (i, a) in EMOTION_LABELS.iter().enumerate() {
            for b in &EMOTION_LABELS[i + 1..] {
                assert_ne!(a.canonical_id, b.canonical_id);
            }
        }
    }

    #[test]
    fn fallback_is_last_entry() {
        assert_eq!(EMOTION_LABELS.last(), Some(&UNKNOWN_LABEL));
    }
}

//! Word count and reading time estimate.

use unicode_segmentation::UnicodeSegmentation;

/// Reading speed used for the estimate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Statistics of a document body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReadingStats {
    /// Number of Unicode scalar values.
    pub chars: usize,
    /// Number of words. Each CJK ideograph counts as one word.
    pub words: usize,
    /// Raw estimate in minutes.
    pub minutes: f64,
}

impl ReadingStats {
    /// Measure `text`.
    #[must_use]
    pub fn measure(text: &str) -> Self {
        let words = text.unicode_words().count();
        #[allow(clippy::cast_precision_loss)]
        let minutes = words as f64 / WORDS_PER_MINUTE;
        Self {
            chars: text.chars().count(),
            words,
            minutes,
        }
    }

    /// Estimate rounded up to whole minutes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_minutes(&self) -> u64 {
        self.minutes.ceil() as u64
    }
}

//! Sentiment scoring boundary for free-text signals.
//!
//! Recommendation ranking does not consume sentiment yet; the contract
//! exists so review-derived signals plug in without reshaping the engine.

/// Compound value at or above which text counts as positive.
pub const POSITIVE_THRESHOLD: f32 = 0.05;

/// Compound value at or below which text counts as negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

/// Polarity bucket derived from a compound sentiment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SentimentLabel {
    /// Compound at or above [`POSITIVE_THRESHOLD`].
    Positive,
    /// Compound strictly between the two thresholds.
    Neutral,
    /// Compound at or below [`NEGATIVE_THRESHOLD`].
    Negative,
}

impl SentimentLabel {
    /// Derive the label for a compound value.
    ///
    /// # Examples
    /// ```
    /// use bazaar_core::SentimentLabel;
    ///
    /// assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
    /// assert_eq!(SentimentLabel::from_compound(0.049), SentimentLabel::Neutral);
    /// assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
    /// ```
    #[must_use]
    pub const fn from_compound(compound: f32) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Return the label as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sanitised compound sentiment value with its derived label.
///
/// # Examples
/// ```
/// use bazaar_core::{SentimentLabel, SentimentScore};
///
/// let score = SentimentScore::new(0.62);
/// assert_eq!(score.compound(), 0.62);
/// assert_eq!(score.label(), SentimentLabel::Positive);
///
/// // Out-of-range and non-finite inputs are sanitised, never propagated.
/// assert_eq!(SentimentScore::new(7.0).compound(), 1.0);
/// assert_eq!(SentimentScore::new(f32::NAN).label(), SentimentLabel::Neutral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentimentScore {
    compound: f32,
    label: SentimentLabel,
}

impl SentimentScore {
    /// Build a score from a raw compound value.
    ///
    /// Non-finite input becomes `0.0`; anything else is clamped to
    /// `-1.0..=1.0` before the label is derived.
    #[must_use]
    pub const fn new(compound: f32) -> Self {
        let sanitised = if !compound.is_finite() {
            0.0
        } else if compound > 1.0 {
            1.0
        } else if compound < -1.0 {
            -1.0
        } else {
            compound
        };
        Self {
            compound: sanitised,
            label: SentimentLabel::from_compound(sanitised),
        }
    }

    /// The sanitised compound value in `-1.0..=1.0`.
    #[must_use]
    pub const fn compound(&self) -> f32 {
        self.compound
    }

    /// The derived polarity bucket.
    #[must_use]
    pub const fn label(&self) -> SentimentLabel {
        self.label
    }
}

/// Score free text for sentiment.
///
/// Implementations must be thread-safe (`Send` + `Sync`). The method is
/// infallible; implementations without an answer (empty text, an offline
/// backend) must return a neutral [`SentimentScore`] of `0.0`.
///
/// # Examples
///
/// ```rust
/// use bazaar_core::{SentimentAnalyzer, SentimentScore};
///
/// struct WordCountAnalyzer;
///
/// impl SentimentAnalyzer for WordCountAnalyzer {
///     fn score_text(&self, text: &str) -> SentimentScore {
///         let polarity = if text.contains("love") {
///             0.8
///         } else if text.contains("broke") {
///             -0.6
///         } else {
///             0.0
///         };
///         SentimentScore::new(polarity)
///     }
/// }
///
/// let analyzer = WordCountAnalyzer;
/// let reviews = ["love the fit", "zipper broke in a week", "arrived on time"];
/// assert_eq!(analyzer.filter_positive(&reviews, 0.05), vec!["love the fit"]);
/// ```
pub trait SentimentAnalyzer: Send + Sync {
    /// Score a piece of text.
    fn score_text(&self, text: &str) -> SentimentScore;

    /// Keep the texts whose compound value reaches `threshold`, in input
    /// order.
    ///
    /// The conventional threshold is [`POSITIVE_THRESHOLD`].
    fn filter_positive<'a>(&self, texts: &'a [&'a str], threshold: f32) -> Vec<&'a str> {
        texts
            .iter()
            .filter(|text| self.score_text(text).compound() >= threshold)
            .copied()
            .collect()
    }
}

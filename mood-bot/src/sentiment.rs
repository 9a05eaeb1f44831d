//! Sentiment scoring for `/sentiment`.
//!
//! [`SentimentScorer`] is the seam the command handler depends on; [`VaderScorer`] backs it with
//! the VADER lexicon from `vader_sentiment`.

use std::fmt;

/// Compound score at or above which text is positive (and at or below whose negation, negative).
pub const MOOD_THRESHOLD: f64 = 0.05;

/// VADER polarity scores. `compound` is normalized to [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl fmt::Display for PolarityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "neg: {:.3}, neu: {:.3}, pos: {:.3}, compound: {:.4}",
            self.neg, self.neu, self.pos, self.compound
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= MOOD_THRESHOLD {
            Mood::Positive
        } else if compound <= -MOOD_THRESHOLD {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Neutral => "neutral",
        })
    }
}

/// Maps text to polarity scores.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// [`SentimentScorer`] using the VADER rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScores {
            neg: get("neg"),
            neu: get("neu"),
            pos: get("pos"),
            compound: get("compound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_thresholds_are_inclusive() {
        assert_eq!(Mood::from_compound(0.05), Mood::Positive);
        assert_eq!(Mood::from_compound(0.8), Mood::Positive);
        assert_eq!(Mood::from_compound(-0.05), Mood::Negative);
        assert_eq!(Mood::from_compound(-1.0), Mood::Negative);
        assert_eq!(Mood::from_compound(0.0), Mood::Neutral);
        assert_eq!(Mood::from_compound(0.0499), Mood::Neutral);
        assert_eq!(Mood::from_compound(-0.0499), Mood::Neutral);
    }

    #[test]
    fn test_vader_scores_obvious_text() {
        let scorer = VaderScorer::new();
        let happy = scorer.polarity_scores("I love this, it is great!");
        let sad = scorer.polarity_scores("This is terrible and I hate it.");

        assert_eq!(Mood::from_compound(happy.compound), Mood::Positive);
        assert_eq!(Mood::from_compound(sad.compound), Mood::Negative);
    }

    #[test]
    fn test_scores_display() {
        let scores = PolarityScores {
            neg: 0.0,
            neu: 0.25,
            pos: 0.75,
            compound: 0.8316,
        };
        assert_eq!(scores.to_string(), "neg: 0.000, neu: 0.250, pos: 0.750, compound: 0.8316");
    }
}

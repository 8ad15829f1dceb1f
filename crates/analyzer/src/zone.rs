use serde::{Serialize, Serializer};

use crate::traits::ToxicitySignals;

pub const BULLYING_TOXICITY: f64 = 0.4;
pub const BULLYING_CLASSIFIER: f64 = 0.5;

/// Severity bucket shown to the writer of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Red,
    Orange,
    Yellow,
    Green,
}

impl Zone {
    /// Bucket for the given scores. The lexicon flag alone is enough for red.
    pub fn classify(toxicity: f64, classifier_score: f64, custom_flag: bool) -> Self {
        let worst = toxicity.max(classifier_score);
        if custom_flag || worst >= 0.7 {
            Self::Red
        } else if worst >= 0.4 {
            Self::Orange
        } else if worst >= 0.2 {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red Zone",
            Self::Orange => "Orange Zone",
            Self::Yellow => "Yellow Zone",
            Self::Green => "Green Zone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Red => "🔴 Red Zone",
            Self::Orange => "🟠 Orange Zone",
            Self::Yellow => "🟡 Yellow Zone",
            Self::Green => "🟢 Green Zone",
        }
    }

    pub fn likelihood(&self) -> &'static str {
        match self {
            Self::Red => "Very high likelihood of bullying",
            Self::Orange => "High likelihood of bullying",
            Self::Yellow => "Medium likelihood of bullying",
            Self::Green => "Low likelihood of bullying",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Red => {
                "Warning: this message looks very harmful. It may seriously hurt someone. This may cross the line into cyberbullying."
            }
            Self::Orange => {
                "This could hurt someone’s feelings — try to say it in a more positive way."
            }
            Self::Yellow => "Looks safe, but context matters — make sure it won’t hurt anyone.",
            Self::Green => "Looks good! No red flags here. Nice one!",
        }
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Whether a message should be treated as bullying and offered a rewrite.
pub fn is_bullying(signals: &ToxicitySignals, custom_flag: bool) -> bool {
    custom_flag
        || signals.toxicity >= BULLYING_TOXICITY
        || signals.classifier_score >= BULLYING_CLASSIFIER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(toxicity: f64, classifier_score: f64) -> ToxicitySignals {
        ToxicitySignals {
            toxicity,
            negative_sentiment: 0.0,
            classifier_score,
            mentions_other_person: false,
        }
    }

    #[test]
    fn test_zone_thresholds() {
        assert_eq!(Zone::classify(0.0, 0.0, false), Zone::Green);
        assert_eq!(Zone::classify(0.19, 0.19, false), Zone::Green);
        assert_eq!(Zone::classify(0.2, 0.0, false), Zone::Yellow);
        assert_eq!(Zone::classify(0.0, 0.39, false), Zone::Yellow);
        assert_eq!(Zone::classify(0.4, 0.0, false), Zone::Orange);
        assert_eq!(Zone::classify(0.1, 0.69, false), Zone::Orange);
        assert_eq!(Zone::classify(0.7, 0.0, false), Zone::Red);
        assert_eq!(Zone::classify(0.0, 0.95, false), Zone::Red);
    }

    #[test]
    fn test_lexicon_hit_is_always_red() {
        assert_eq!(Zone::classify(0.0, 0.0, true), Zone::Red);
    }

    #[test]
    fn test_bullying_thresholds_differ_per_signal() {
        assert!(is_bullying(&signals(0.4, 0.0), false));
        assert!(!is_bullying(&signals(0.0, 0.45), false));
        assert!(is_bullying(&signals(0.0, 0.5), false));
        assert!(is_bullying(&signals(0.0, 0.0), true));
    }

    #[test]
    fn test_orange_without_bullying_flag() {
        // classifier 0.45 is orange but stays below the rewrite threshold
        let s = signals(0.1, 0.45);
        assert_eq!(Zone::classify(s.toxicity, s.classifier_score, false), Zone::Orange);
        assert!(!is_bullying(&s, false));
    }

    #[test]
    fn test_zone_serializes_by_name() {
        let json = serde_json::to_string(&Zone::Yellow).unwrap();
        assert_eq!(json, "\"Yellow Zone\"");
    }
}

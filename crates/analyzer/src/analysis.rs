use serde::Serialize;

use crate::Result;
use crate::lexicon::PhraseLexicon;
use crate::traits::{TextAnalyzer, ToxicitySignals};
use crate::zone::{Zone, is_bullying};

/// Full assessment of one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub text: String,
    pub signals: ToxicitySignals,
    pub custom_flag: bool,
    pub is_bullying: bool,
    pub zone: Zone,
    pub suggested_text: Option<String>,
}

impl Analysis {
    pub fn likelihood(&self) -> &'static str {
        self.zone.likelihood()
    }

    pub fn advice(&self) -> &'static str {
        self.zone.advice()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score `text`, place it in a zone and, when it reads as bullying, ask for
/// a friendlier rewrite.
pub async fn analyze(
    analyzer: &dyn TextAnalyzer,
    lexicon: &PhraseLexicon,
    text: &str,
) -> Result<Analysis> {
    let raw = analyzer.signals(text).await?;
    let signals = ToxicitySignals {
        toxicity: round2(raw.toxicity),
        negative_sentiment: round2(raw.negative_sentiment),
        ..raw
    };

    let custom_flag = lexicon.matches(text);
    let is_bullying = is_bullying(&signals, custom_flag);
    let zone = Zone::classify(signals.toxicity, signals.classifier_score, custom_flag);

    let suggested_text = if is_bullying {
        Some(analyzer.rewrite(text).await?)
    } else {
        None
    };

    tracing::info!(
        zone = zone.name(),
        is_bullying,
        custom_flag,
        toxicity = signals.toxicity,
        classifier = signals.classifier_score,
        "Text analyzed"
    );

    Ok(Analysis {
        text: text.to_string(),
        signals,
        custom_flag,
        is_bullying,
        zone,
        suggested_text,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::AnalyzerError;

    struct FixedAnalyzer {
        signals: ToxicitySignals,
        rewrites: AtomicUsize,
    }

    impl FixedAnalyzer {
        fn new(toxicity: f64, classifier_score: f64) -> Self {
            Self {
                signals: ToxicitySignals {
                    toxicity,
                    negative_sentiment: 0.876,
                    classifier_score,
                    mentions_other_person: true,
                },
                rewrites: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextAnalyzer for FixedAnalyzer {
        async fn signals(&self, _text: &str) -> Result<ToxicitySignals> {
            Ok(self.signals)
        }

        async fn rewrite(&self, text: &str) -> Result<String> {
            self.rewrites.fetch_add(1, Ordering::SeqCst);
            Ok(format!("kindly: {}", text))
        }
    }

    struct Unreachable;

    #[async_trait]
    impl TextAnalyzer for Unreachable {
        async fn signals(&self, _text: &str) -> Result<ToxicitySignals> {
            Err(AnalyzerError::UpstreamError("down".to_string()))
        }

        async fn rewrite(&self, _text: &str) -> Result<String> {
            Err(AnalyzerError::UpstreamError("down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_harmless_text_is_not_rewritten() {
        let analyzer = FixedAnalyzer::new(0.01, 0.02);
        let analysis = analyze(&analyzer, &PhraseLexicon::empty(), "have a great day")
            .await
            .unwrap();

        assert_eq!(analysis.zone, Zone::Green);
        assert!(!analysis.is_bullying);
        assert_eq!(analysis.suggested_text, None);
        assert_eq!(analyzer.rewrites.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_toxic_text_is_rewritten() {
        let analyzer = FixedAnalyzer::new(0.93, 0.81);
        let analysis = analyze(&analyzer, &PhraseLexicon::empty(), "you are awful")
            .await
            .unwrap();

        assert_eq!(analysis.zone, Zone::Red);
        assert!(analysis.is_bullying);
        assert_eq!(analysis.suggested_text.as_deref(), Some("kindly: you are awful"));
        assert_eq!(analysis.likelihood(), "Very high likelihood of bullying");
    }

    #[tokio::test]
    async fn test_lexicon_hit_overrides_low_scores() {
        let analyzer = FixedAnalyzer::new(0.05, 0.05);
        let lexicon = PhraseLexicon::new(&["loser".to_string()], &[]).unwrap();

        let analysis = analyze(&analyzer, &lexicon, "what a loser").await.unwrap();

        assert!(analysis.custom_flag);
        assert_eq!(analysis.zone, Zone::Red);
        assert!(analysis.suggested_text.is_some());
    }

    #[tokio::test]
    async fn test_scores_are_rounded_before_thresholds() {
        // 0.396 rounds up to 0.4, which is enough to flag
        let analyzer = FixedAnalyzer::new(0.396, 0.0);
        let analysis = analyze(&analyzer, &PhraseLexicon::empty(), "meh").await.unwrap();

        assert_eq!(analysis.signals.toxicity, 0.4);
        assert_eq!(analysis.signals.negative_sentiment, 0.88);
        assert!(analysis.is_bullying);
        assert_eq!(analysis.zone, Zone::Orange);
    }

    #[tokio::test]
    async fn test_service_failure_is_reported() {
        let result = analyze(&Unreachable, &PhraseLexicon::empty(), "hello").await;
        assert!(matches!(result, Err(AnalyzerError::UpstreamError(_))));
    }
}

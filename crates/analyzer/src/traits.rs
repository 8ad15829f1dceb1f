use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Raw model outputs for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToxicitySignals {
    /// General toxicity probability
    pub toxicity: f64,
    /// Confidence of a negative sentiment label, `0.0` when positive
    pub negative_sentiment: f64,
    /// Toxic-class probability from the dedicated classifier
    pub classifier_score: f64,
    /// Whether the text addresses someone other than the writer
    pub mentions_other_person: bool,
}

#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn signals(&self, text: &str) -> Result<ToxicitySignals>;

    /// A friendlier version of `text` that keeps its meaning.
    async fn rewrite(&self, text: &str) -> Result<String>;
}

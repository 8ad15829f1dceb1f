use analyzer::{Analysis, AnalyzerError, analyze};
use storage::{dto::analysis::AnalyzeResponse, models::MessageRecord};

use crate::state::AppState;

fn message_record(analysis: &Analysis) -> MessageRecord {
    MessageRecord {
        text: analysis.text.clone(),
        is_bullying: analysis.is_bullying,
        toxicity_score: analysis.signals.toxicity,
        sentiment_score: analysis.signals.negative_sentiment,
        suggested_text: analysis.suggested_text.clone().unwrap_or_default(),
        person_or_pronoun: analysis.signals.mentions_other_person,
        classifier_score: analysis.signals.classifier_score,
        zone: analysis.zone.name().to_string(),
        likelihood: analysis.likelihood().to_string(),
        comment: analysis.advice().to_string(),
    }
}

/// Assess a message and keep a record of the result.
///
/// A failure to store the record is logged and otherwise ignored.
pub async fn analyze_text(state: &AppState, text: &str) -> Result<AnalyzeResponse, AnalyzerError> {
    let analysis = analyze(state.analyzer.as_ref(), &state.lexicon, text).await?;

    if let Err(e) = state.store.log_analysis(&message_record(&analysis)).await {
        tracing::warn!("Failed to record analysis: {}", e);
    }

    Ok(AnalyzeResponse {
        zone: analysis.zone.label().to_string(),
        likelihood: analysis.likelihood().to_string(),
        comment: analysis.advice().to_string(),
        suggested_text: analysis.suggested_text.unwrap_or_default(),
    })
}

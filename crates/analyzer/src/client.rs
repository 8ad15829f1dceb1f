use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::gemini::GeminiClient;
use crate::prompts::PromptBuilder;
use crate::traits::{TextAnalyzer, ToxicitySignals};
use crate::{AnalyzerError, Result};

pub const DEFAULT_ANALYZER_URL: &str = "http://localhost:7860";

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RewriteResponse {
    text: String,
}

/// [`TextAnalyzer`] backed by the model inference service.
///
/// Scores come from `POST {base_url}/signals`. Rewrites go to Gemini when an
/// API key is configured and fall back to the service's local rewrite model
/// at `POST {base_url}/rewrite` when Gemini is missing or fails.
pub struct HttpTextAnalyzer {
    client: Client,
    base_url: String,
    gemini: Option<GeminiClient>,
}

impl HttpTextAnalyzer {
    pub fn new(base_url: impl Into<String>, gemini: Option<GeminiClient>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            gemini,
        })
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, text: &str) -> Result<T> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .json(&TextPayload { text })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::UpstreamError(format!(
                "Inference service error ({}): {}",
                status, error_text
            )));
        }

        Ok(response.json().await?)
    }

    async fn rewrite_locally(&self, text: &str) -> Result<String> {
        let response: RewriteResponse = self.post("rewrite", text).await?;
        Ok(response.text.trim().to_string())
    }

    /// Check if the inference service is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

#[async_trait]
impl TextAnalyzer for HttpTextAnalyzer {
    async fn signals(&self, text: &str) -> Result<ToxicitySignals> {
        self.post("signals", text).await
    }

    async fn rewrite(&self, text: &str) -> Result<String> {
        if let Some(gemini) = &self.gemini {
            match gemini.generate(&PromptBuilder::rewrite_prompt(text)).await {
                Ok(rewritten) => return Ok(rewritten),
                Err(e) => {
                    tracing::warn!("Gemini rewrite failed, using local model: {}", e);
                }
            }
        }

        self.rewrite_locally(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let analyzer = HttpTextAnalyzer::new("http://localhost:7860/", None).unwrap();
        assert_eq!(analyzer.base_url, "http://localhost:7860");
    }

    #[tokio::test]
    #[ignore] // Only run when the inference service is running
    async fn test_health_check() {
        let analyzer = HttpTextAnalyzer::new(DEFAULT_ANALYZER_URL, None).unwrap();
        assert!(analyzer.health_check().await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Only run when the inference service is running
    async fn test_signals_for_insult() {
        let analyzer = HttpTextAnalyzer::new(DEFAULT_ANALYZER_URL, None).unwrap();
        let signals = analyzer.signals("you are a worthless idiot").await.unwrap();
        assert!(signals.toxicity > 0.4);
    }

    #[tokio::test]
    #[ignore] // Only run when the inference service is running
    async fn test_local_rewrite() {
        let analyzer = HttpTextAnalyzer::new(DEFAULT_ANALYZER_URL, None).unwrap();
        let rewritten = analyzer.rewrite("nobody likes you").await.unwrap();
        assert!(!rewritten.is_empty());
    }
}

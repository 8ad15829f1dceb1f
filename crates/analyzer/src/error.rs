use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Upstream service error: {0}")]
    UpstreamError(String),

    #[error("Invalid lexicon: {0}")]
    LexiconError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

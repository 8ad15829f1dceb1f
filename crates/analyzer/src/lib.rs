pub mod analysis;
pub mod client;
pub mod error;
pub mod gemini;
pub mod lexicon;
pub mod prompts;
pub mod traits;
pub mod zone;

pub use analysis::{Analysis, analyze};
pub use client::{DEFAULT_ANALYZER_URL, HttpTextAnalyzer};
pub use error::{AnalyzerError, Result};
pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use lexicon::PhraseLexicon;
pub use traits::{TextAnalyzer, ToxicitySignals};
pub use zone::Zone;

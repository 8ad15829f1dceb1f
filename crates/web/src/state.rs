use std::sync::Arc;

use analyzer::{PhraseLexicon, TextAnalyzer};
use storage::Store;

/// Capabilities shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub analyzer: Arc<dyn TextAnalyzer>,
    pub lexicon: Arc<PhraseLexicon>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        analyzer: Arc<dyn TextAnalyzer>,
        lexicon: Arc<PhraseLexicon>,
    ) -> Self {
        Self {
            store,
            analyzer,
            lexicon,
        }
    }
}

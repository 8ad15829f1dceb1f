//! The persistence capability the quiz and analysis services are built on.
//!
//! Services receive an `Arc<dyn Store>` at construction and never reach
//! for a connection pool themselves, so they run unchanged against
//! PostgreSQL in production and against [`InMemoryStore`] in tests.

mod memory;
mod postgres;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, Comment, MessageRecord, NewSubmission, RecordedSubmission};

pub use memory::InMemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    async fn fetch_all_comments(&self) -> Result<Vec<Comment>>;

    /// Categories for the given ids; ids with no comment are left out.
    async fn lookup_categories(&self, ids: &[i32]) -> Result<HashMap<i32, Category>>;

    /// Texts for the given ids; ids with no comment are left out.
    async fn lookup_texts(&self, ids: &[i32]) -> Result<HashMap<i32, String>>;

    /// Insert the submission summary and every response as a single unit and
    /// return the history counts observed inside that unit.
    async fn record_submission(&self, submission: &NewSubmission) -> Result<RecordedSubmission>;

    async fn log_analysis(&self, message: &MessageRecord) -> Result<()>;
}

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::Store;
use crate::error::Result;
use crate::models::{
    Category, Comment, GradedResponse, MessageRecord, NewSubmission, RecordedSubmission,
};

#[derive(Debug, Default)]
struct History {
    next_id: i32,
    scores: Vec<(i32, i32)>,
    responses: Vec<(i32, GradedResponse)>,
    messages: Vec<MessageRecord>,
}

/// Process-local [`Store`]. A single lock guards the whole history, which
/// makes each recorded submission atomic with respect to its counts.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    comments: Vec<Comment>,
    history: Mutex<History>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            history: Mutex::default(),
        }
    }

    /// Add past submissions that only carry a score.
    pub fn seed_scores(&self, scores: impl IntoIterator<Item = i32>) {
        let mut history = self.history();
        for score in scores {
            history.next_id += 1;
            let id = history.next_id;
            history.scores.push((id, score));
        }
    }

    pub fn submission_count(&self) -> usize {
        self.history().scores.len()
    }

    pub fn response_count(&self) -> usize {
        self.history().responses.len()
    }

    pub fn responses_for(&self, submission_id: i32) -> Vec<GradedResponse> {
        self.history()
            .responses
            .iter()
            .filter(|(id, _)| *id == submission_id)
            .map(|(_, response)| response.clone())
            .collect()
    }

    pub fn messages(&self) -> Vec<MessageRecord> {
        self.history().messages.clone()
    }

    fn history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn find(&self, id: i32) -> Option<&Comment> {
        self.comments.iter().find(|c| c.comment_id == id)
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn fetch_all_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.comments.clone())
    }

    async fn lookup_categories(&self, ids: &[i32]) -> Result<HashMap<i32, Category>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.find(*id).map(|c| (*id, c.category.clone())))
            .collect())
    }

    async fn lookup_texts(&self, ids: &[i32]) -> Result<HashMap<i32, String>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.find(*id).map(|c| (*id, c.text.clone())))
            .collect())
    }

    async fn record_submission(&self, submission: &NewSubmission) -> Result<RecordedSubmission> {
        let mut history = self.history();

        history.next_id += 1;
        let submission_id = history.next_id;
        history.scores.push((submission_id, submission.score));
        for response in &submission.responses {
            history.responses.push((submission_id, response.clone()));
        }

        let total_submissions = history.scores.len() as i64;
        let not_better_count = history
            .scores
            .iter()
            .filter(|(_, score)| *score <= submission.score)
            .count() as i64;

        Ok(RecordedSubmission {
            submission_id,
            total_submissions,
            not_better_count,
        })
    }

    async fn log_analysis(&self, message: &MessageRecord) -> Result<()> {
        self.history().messages.push(message.clone());
        Ok(())
    }
}

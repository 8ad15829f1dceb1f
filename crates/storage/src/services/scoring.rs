//! Grades a batch of quiz responses against the comments' true labels.
//!
//! Grading itself is pure: [`grade`] turns responses plus a category lookup
//! into a [`Grade`]. [`score_submission`] wraps it with the store round trips
//! (label lookup, mistake texts, persistence and the historical percentile).

use std::collections::{HashMap, HashSet};

use crate::error::ScoringError;
use crate::models::{Category, GradedResponse, NewSubmission, UserResponse};
use crate::services::feedback::feedback_for;
use crate::store::Store;

pub const POINTS_PER_CORRECT: i32 = 10;
pub const PENALTY_PER_MISTAKE: i32 = 5;

/// Outcome of grading, before anything is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub answered: i32,
    pub correct: i32,
    pub score: i32,
    /// Unrounded; see [`percentage`]
    pub percent: f64,
    pub weakest: Option<Category>,
    pub responses: Vec<GradedResponse>,
}

impl Grade {
    pub fn mistakes(&self) -> impl Iterator<Item = &GradedResponse> {
        self.responses.iter().filter(|r| !r.correct)
    }
}

/// An incorrectly judged comment as shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
    pub text: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub mistakes: Vec<Mistake>,
    pub weakest: Option<Category>,
    pub feedback: String,
    pub score: i32,
    pub answered: i32,
    pub correct: i32,
    pub percent: f64,
    pub submission_id: i32,
    /// Unrounded share of history scoring at most `score`
    pub comparison: f64,
}

/// `10` per correct answer, `-5` per mistake, never below zero.
pub fn compute_score(answered: i32, correct: i32) -> i32 {
    let mistakes = answered - correct;
    (POINTS_PER_CORRECT * correct - PENALTY_PER_MISTAKE * mistakes).max(0)
}

/// `100 * part / whole`, unrounded.
///
/// Rounding to one decimal happens only when the value is formatted, which
/// resolves exact halves to even (`6.25` shows as `6.2`).
pub fn percentage(part: i64, whole: i64) -> f64 {
    100.0 * part as f64 / whole as f64
}

/// The category with the highest share of incorrect answers.
///
/// Categories are visited in the order they first appear and a later one
/// only wins with a strictly higher ratio, so ties go to the earliest.
pub fn weakest_category(responses: &[GradedResponse]) -> Option<Category> {
    // (category, total, incorrect) in first-seen order
    let mut tallies: Vec<(&Category, u32, u32)> = Vec::new();

    for response in responses {
        let index = match tallies.iter().position(|(c, _, _)| **c == response.category) {
            Some(index) => index,
            None => {
                tallies.push((&response.category, 0, 0));
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[index];
        tally.1 += 1;
        if !response.correct {
            tally.2 += 1;
        }
    }

    let mut weakest: Option<(&Category, u32, u32)> = None;
    for (category, total, incorrect) in tallies {
        if incorrect == 0 {
            continue;
        }
        let beats_current = match weakest {
            None => true,
            // incorrect / total > best_incorrect / best_total, without floats
            Some((_, best_total, best_incorrect)) => {
                u64::from(incorrect) * u64::from(best_total)
                    > u64::from(best_incorrect) * u64::from(total)
            }
        };
        if beats_current {
            weakest = Some((category, total, incorrect));
        }
    }

    weakest.map(|(category, _, _)| category.clone())
}

/// Grade each response independently against `categories`.
///
/// A comment id that appears twice is graded twice. Any id missing from
/// `categories` rejects the whole batch.
pub fn grade(
    responses: &[UserResponse],
    categories: &HashMap<i32, Category>,
) -> Result<Grade, ScoringError> {
    if responses.is_empty() {
        return Err(ScoringError::EmptySubmission);
    }

    let graded = responses
        .iter()
        .map(|response| {
            categories
                .get(&response.comment_id)
                .cloned()
                .map(|category| GradedResponse::grade(response, category))
                .ok_or(ScoringError::MissingReference {
                    comment_id: response.comment_id,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let answered = i32::try_from(graded.len()).unwrap_or(i32::MAX);
    let correct = i32::try_from(graded.iter().filter(|r| r.correct).count()).unwrap_or(i32::MAX);

    Ok(Grade {
        answered,
        correct,
        score: compute_score(answered, correct),
        percent: percentage(correct.into(), answered.into()),
        weakest: weakest_category(&graded),
        responses: graded,
    })
}

/// Grade, persist and rank one submission.
///
/// Every lookup happens before the write, so a rejected submission leaves
/// no trace in the store.
pub async fn score_submission(
    store: &dyn Store,
    responses: &[UserResponse],
) -> Result<ScoreResult, ScoringError> {
    if responses.is_empty() {
        return Err(ScoringError::EmptySubmission);
    }

    let ids = unique_ids(responses.iter().map(|r| r.comment_id));
    let categories = store.lookup_categories(&ids).await?;
    let grade = grade(responses, &categories)?;

    let mistake_ids = unique_ids(grade.mistakes().map(|r| r.comment_id));
    let texts = if mistake_ids.is_empty() {
        HashMap::new()
    } else {
        store.lookup_texts(&mistake_ids).await?
    };

    let mistakes = grade
        .mistakes()
        .map(|response| {
            texts
                .get(&response.comment_id)
                .map(|text| Mistake {
                    text: text.clone(),
                    label: response.category.display_label(),
                })
                .ok_or(ScoringError::MissingReference {
                    comment_id: response.comment_id,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let feedback = feedback_for(grade.weakest.as_ref());

    let recorded = store
        .record_submission(&NewSubmission {
            answered: grade.answered,
            correct: grade.correct,
            score: grade.score,
            responses: grade.responses.clone(),
        })
        .await?;

    tracing::info!(
        submission_id = recorded.submission_id,
        answered = grade.answered,
        correct = grade.correct,
        score = grade.score,
        weakest = grade.weakest.as_ref().map(Category::as_str),
        "Submission scored"
    );

    Ok(ScoreResult {
        mistakes,
        weakest: grade.weakest,
        feedback,
        score: grade.score,
        answered: grade.answered,
        correct: grade.correct,
        percent: grade.percent,
        submission_id: recorded.submission_id,
        comparison: percentage(recorded.not_better_count, recorded.total_submissions),
    })
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

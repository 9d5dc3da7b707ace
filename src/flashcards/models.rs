//! Data models for the flashcard system

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A flashcard with a prompt (front) and its expected answer (back)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// The word or question shown to the user. Used as the lookup key.
    pub front: String,
    /// The translation or answer
    pub back: String,
    /// Correct-answer counter. Decremented (floored at zero) on a miss.
    pub correct_count: u32,
    /// Last review attempt, whole seconds. Creation counts as the first one.
    pub last_review: DateTime<Utc>,
}

impl Flashcard {
    pub fn new(front: String, back: String, created_at: DateTime<Utc>) -> Self {
        Self {
            front,
            back,
            correct_count: 0,
            last_review: created_at,
        }
    }
}

/// Aggregate mastery report over the whole card set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_cards: usize,
    pub mastered_cards: usize,
    /// `mastered * 100 / total`, truncated
    pub mastery_percent: usize,
    /// Cards that a review session started now would present
    pub due_cards: usize,
}

/// Result of a review session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ReviewOutcome {
    /// The card set is empty
    NoCards,
    /// Cards exist but none is due
    NothingDue,
    /// A pass was run over the due cards
    #[serde(rename_all = "camelCase")]
    Completed {
        due: usize,
        reviewed: usize,
        correct: usize,
    },
}

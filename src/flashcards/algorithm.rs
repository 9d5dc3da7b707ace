//! Review scheduling rules
//!
//! A card is due when it is not yet mastered, or when a full review interval
//! has elapsed since its last review. Mastered cards therefore resurface once
//! a day.
//!
//! Answer transition:
//! - correct: `correct_count + 1`
//! - incorrect: `correct_count - 1`, floored at zero
//!
//! Both refresh `last_review` to the time of the answer.

use chrono::{DateTime, Duration, Utc};

use super::models::Flashcard;

/// Correct answers needed before a card counts as mastered
pub const MASTERY_THRESHOLD: u32 = 3;

/// Seconds after which even a mastered card is due again
pub const REVIEW_INTERVAL_SECS: i64 = 86_400;

/// The review interval as a duration
pub fn review_interval() -> Duration {
    Duration::seconds(REVIEW_INTERVAL_SECS)
}

/// Whether the card has reached the mastery threshold
pub fn is_mastered(card: &Flashcard) -> bool {
    card.correct_count >= MASTERY_THRESHOLD
}

/// Whether the card should be presented in a session started at `now`
pub fn is_due(card: &Flashcard, now: DateTime<Utc>) -> bool {
    !is_mastered(card) || now - card.last_review >= review_interval()
}

/// Apply one answer to a card
pub fn apply_answer(card: &mut Flashcard, correct: bool, at: DateTime<Utc>) {
    if correct {
        card.correct_count = card.correct_count.saturating_add(1);
    } else {
        card.correct_count = card.correct_count.saturating_sub(1);
    }
    card.last_review = at;
}

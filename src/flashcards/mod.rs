//! Flashcard drilling for LinguaCards
//!
//! This module provides:
//! - The card model and its plain-text persisted layout
//! - `FlashcardStore`, the sole owner of the card set
//! - Due selection and the per-answer transition
//! - The interactive review session
//! - Mastery statistics

pub mod algorithm;
pub mod format;
pub mod models;
pub mod review;
pub mod stats;
pub mod storage;

pub use models::*;
pub use review::{ReviewEngine, ReviewError, ReviewOptions};
pub use stats::compute_stats;
pub use storage::{FlashcardStorageError, FlashcardStore};

//! Interactive review session
//!
//! One session is a single pass over the cards that were due when it started,
//! in shuffled order. Each answer is applied to the store right away. The
//! store is persisted once at the end of the pass, or after every answer when
//! [`ReviewOptions::save_after_each_answer`] is set.

use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::algorithm::is_due;
use super::models::{Flashcard, ReviewOutcome};
use super::storage::{FlashcardStorageError, FlashcardStore};
use crate::clock::Clock;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Storage(#[from] FlashcardStorageError),
}

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewOptions {
    /// Persist after every answer instead of only at the end of the pass
    pub save_after_each_answer: bool,
}

/// Drives review sessions against a borrowed store
pub struct ReviewEngine<'a, C: Clock + ?Sized> {
    store: &'a mut FlashcardStore,
    clock: &'a C,
    options: ReviewOptions,
}

impl<'a, C: Clock + ?Sized> ReviewEngine<'a, C> {
    pub fn new(store: &'a mut FlashcardStore, clock: &'a C) -> Self {
        Self {
            store,
            clock,
            options: ReviewOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReviewOptions) -> Self {
        self.options = options;
        self
    }

    /// Snapshot of the cards due at `now`, in insertion order
    pub fn due_cards(&self, now: chrono::DateTime<chrono::Utc>) -> Vec<Flashcard> {
        self.store
            .all_cards()
            .iter()
            .filter(|card| is_due(card, now))
            .cloned()
            .collect()
    }

    /// Run one pass, reading answers from `input` and writing prompts to `output`
    pub fn run<R, W, G>(&mut self, input: &mut R, output: &mut W, rng: &mut G) -> Result<ReviewOutcome>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
        G: Rng + ?Sized,
    {
        if self.store.is_empty() {
            writeln!(output, "No flashcards available. Add some first!")?;
            return Ok(ReviewOutcome::NoCards);
        }

        let started_at = self.clock.now();
        let mut due = self.due_cards(started_at);
        if due.is_empty() {
            writeln!(output, "No cards due for review!")?;
            return Ok(ReviewOutcome::NothingDue);
        }

        log::debug!("{} of {} cards due", due.len(), self.store.len());
        due.shuffle(rng);

        let mut reviewed = 0;
        let mut correct = 0;

        for card in &due {
            write!(output, "Front: {}\nEnter answer: ", card.front)?;
            output.flush()?;

            let Some(answer) = read_answer(input)? else {
                log::info!("Input closed after {} of {} cards", reviewed, due.len());
                writeln!(output)?;
                break;
            };

            let is_correct = answer == card.back;
            if is_correct {
                writeln!(output, "Correct!")?;
                correct += 1;
            } else {
                writeln!(output, "Incorrect. Answer: {}", card.back)?;
            }

            self.store.apply_result(&card.front, is_correct, self.clock.now());
            reviewed += 1;

            if self.options.save_after_each_answer {
                self.store.save()?;
            }
        }

        if !self.options.save_after_each_answer {
            self.store.save()?;
        }

        Ok(ReviewOutcome::Completed {
            due: due.len(),
            reviewed,
            correct,
        })
    }
}

/// Read one answer line without its terminator. `None` at end of input.
fn read_answer<R: BufRead + ?Sized>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

//! Storage for the card set
//!
//! The whole set lives in memory and is mirrored to a single text file
//! (see [`super::format`]). Every save rewrites the file in full.
//!
//! ```text
//! ~/.local/share/linguacards/
//! └── flashcards.txt
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::format::{parse_cards, render_cards};
use super::models::Flashcard;

#[derive(Error, Debug)]
pub enum FlashcardStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field}: line breaks are not allowed")]
    InvalidField { field: &'static str },

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, FlashcardStorageError>;

/// Owner of the card set and its persisted mirror
#[derive(Debug)]
pub struct FlashcardStore {
    /// Backing file. `None` keeps the set in memory only.
    path: Option<PathBuf>,
    cards: Vec<Flashcard>,
}

impl FlashcardStore {
    /// Default card file (e.g. ~/.local/share/linguacards/flashcards.txt)
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("linguacards").join("flashcards.txt"))
            .ok_or(FlashcardStorageError::DataDirNotFound)
    }

    /// Open a store backed by `path` and load whatever it holds
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut store = Self {
            path: Some(path),
            cards: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// A store that never touches the filesystem
    pub fn in_memory(cards: Vec<Flashcard>) -> Self {
        Self { path: None, cards }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the in-memory set with the file's contents.
    ///
    /// A missing file yields an empty set. Malformed trailing data is dropped.
    pub fn load(&mut self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No card file at {:?}, starting empty", path);
                self.cards.clear();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        self.cards = parse_cards(&content);
        log::debug!("Loaded {} cards from {:?}", self.cards.len(), path);
        Ok(())
    }

    /// Write the full set to the backing file, overwriting it
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, render_cards(&self.cards))?;
        log::info!("Saved {} cards to {:?}", self.cards.len(), path);
        Ok(())
    }

    /// Append a new card and persist.
    ///
    /// Fronts are not checked for uniqueness. If the save fails the card is
    /// not kept.
    pub fn add_card(&mut self, front: String, back: String, now: DateTime<Utc>) -> Result<Flashcard> {
        validate_field("front", &front)?;
        validate_field("back", &back)?;

        let card = Flashcard::new(front, back, now);
        self.cards.push(card.clone());
        if let Err(e) = self.save() {
            self.cards.pop();
            return Err(e);
        }

        log::info!("Added card {:?}", card.front);
        Ok(card)
    }

    /// Apply an answer to every card whose front matches.
    ///
    /// Returns the number of cards updated. Does not persist.
    pub fn apply_result(&mut self, front: &str, correct: bool, at: DateTime<Utc>) -> usize {
        let mut updated = 0;
        for card in self.cards.iter_mut().filter(|c| c.front == front) {
            super::algorithm::apply_answer(card, correct, at);
            updated += 1;
        }
        updated
    }

    /// Read-only view of the set in insertion order
    pub fn all_cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn validate_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(FlashcardStorageError::InvalidField { field });
    }
    Ok(())
}

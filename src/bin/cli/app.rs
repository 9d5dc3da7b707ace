use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use linguacards_lib::clock::{Clock, SystemClock};
use linguacards_lib::config::AppConfig;
use linguacards_lib::flashcards::{
    compute_stats, Flashcard, FlashcardStorageError, FlashcardStore, ReviewEngine, ReviewError,
    ReviewOutcome, StatsReport,
};

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub store: FlashcardStore,
    pub clock: Box<dyn Clock>,
}

impl App {
    /// Load config and the card file
    pub fn new(config_path: Option<&Path>, data_file: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => AppConfig::default_path().context("Failed to get config directory")?,
        };
        let config = AppConfig::load(&config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;

        let data_file = config
            .data_file(data_file)
            .context("Failed to get data directory")?;
        let store = FlashcardStore::open(data_file.clone())
            .with_context(|| format!("Failed to load cards from {}", data_file.display()))?;

        Ok(Self::with_parts(config, store, Box::new(SystemClock)))
    }

    pub fn with_parts(config: AppConfig, store: FlashcardStore, clock: Box<dyn Clock>) -> Self {
        Self { config, store, clock }
    }

    /// Add a card stamped with the current time
    pub fn add_card(&mut self, front: String, back: String) -> Result<Flashcard, FlashcardStorageError> {
        let now = self.clock.now();
        self.store.add_card(front, back, now)
    }

    /// Run one review session with a fresh shuffle
    pub fn review<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<ReviewOutcome, ReviewError>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let options = self.config.review_options();
        ReviewEngine::new(&mut self.store, self.clock.as_ref())
            .with_options(options)
            .run(input, output, &mut rand::thread_rng())
    }

    pub fn stats(&self) -> Option<StatsReport> {
        compute_stats(self.store.all_cards(), self.clock.now())
    }

    pub fn is_due(&self, card: &Flashcard) -> bool {
        linguacards_lib::flashcards::algorithm::is_due(card, self.clock.now())
    }

    /// Persist the card set
    pub fn save(&self) -> Result<()> {
        self.store.save().context("Failed to save cards")
    }
}

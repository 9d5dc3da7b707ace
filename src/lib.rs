pub mod clock;
pub mod config;
pub mod flashcards;

pub use clock::{Clock, SystemClock};
pub use config::AppConfig;

pub mod card;
pub mod commands;
pub mod deck;
pub mod error;
pub mod loader;
pub mod logging;
pub mod palette;
pub mod presenter;
pub mod quiz;
pub mod report;
pub mod stats;
pub mod strategy;
pub mod utils;

pub use card::CardRecord;
pub use deck::Deck;
pub use error::QuizError;
pub use quiz::{CompletionReason, QuizSession, SessionReport, SessionState};
pub use stats::{SessionSummary, SessionTracker};
pub use strategy::{QuizMode, SelectionStrategy, StrategyOptions};

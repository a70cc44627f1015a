pub mod adaptive;
pub mod random;
pub mod sequential;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::deck::Deck;
use crate::error::QuizError;

pub use adaptive::AdaptiveRequeue;
pub use random::RandomOrder;
pub use sequential::SequentialOrder;

pub const DEFAULT_LIMIT_FACTOR: usize = 3;

/// Decides which card is presented next.
///
/// Implementations keep their bookkeeping private. The controller calls
/// `record_outcome` exactly once per index handed out, before asking for the
/// next one.
pub trait SelectionStrategy {
    /// Fails with [`QuizError::Exhausted`] when nothing more is due, or with
    /// [`QuizError::PresentationLimit`] when a hard cap ended the session early.
    fn next_index(&mut self, deck: &Deck) -> Result<usize, QuizError>;

    fn record_outcome(&mut self, index: usize, was_correct: bool);

    fn is_exhausted(&self) -> bool;

    /// Number of cards the strategy was built for.
    fn len(&self) -> usize;

    fn name(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizMode {
    #[default]
    Sequential,
    Random,
    Adaptive,
}

impl QuizMode {
    pub const ALL: [QuizMode; 3] = [QuizMode::Sequential, QuizMode::Random, QuizMode::Adaptive];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::Sequential => "sequential",
            QuizMode::Random => "random",
            QuizMode::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizMode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        QuizMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QuizError::UnknownMode(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrategyOptions {
    /// Adaptive sessions stop after `limit_factor * deck.len()` presentations.
    pub limit_factor: usize,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            limit_factor: DEFAULT_LIMIT_FACTOR,
        }
    }
}

pub fn build_strategy<R>(
    mode: QuizMode,
    deck: &Deck,
    options: StrategyOptions,
    rng: &mut R,
) -> Box<dyn SelectionStrategy>
where
    R: Rng + ?Sized,
{
    match mode {
        QuizMode::Sequential => Box::new(SequentialOrder::new(deck.len())),
        QuizMode::Random => Box::new(RandomOrder::new(deck.len(), rng)),
        QuizMode::Adaptive => Box::new(AdaptiveRequeue::new(deck.len(), options.limit_factor)),
    }
}

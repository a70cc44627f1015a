use thiserror::Error;

/// Errors produced by the quiz core.
///
/// `Exhausted` and `PresentationLimit` are not failures: the session controller
/// consumes them to decide how a session finished.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("cannot start a quiz with an empty deck")]
    EmptyDeck,

    #[error("unknown quiz mode '{0}', expected one of: sequential, random, adaptive")]
    UnknownMode(String),

    #[error("no more cards to present")]
    Exhausted,

    #[error("presentation limit of {limit} reached")]
    PresentationLimit { limit: usize },

    #[error("quiz session is {state}, cannot continue")]
    InvalidState { state: &'static str },

    #[error("card index {index} out of range for a deck of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("strategy was built for {strategy} cards but the deck has {deck}")]
    DeckSizeMismatch { deck: usize, strategy: usize },
}

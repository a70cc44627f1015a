use tracing::trace;

use crate::deck::Deck;
use crate::error::QuizError;
use crate::strategy::SelectionStrategy;

/// Deck order, each card once.
#[derive(Debug, Clone)]
pub struct SequentialOrder {
    cursor: usize,
    len: usize,
}

impl SequentialOrder {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }
}

impl SelectionStrategy for SequentialOrder {
    fn next_index(&mut self, _deck: &Deck) -> Result<usize, QuizError> {
        if self.is_exhausted() {
            return Err(QuizError::Exhausted);
        }
        let index = self.cursor;
        self.cursor += 1;
        trace!(index, "sequential pick");
        Ok(index)
    }

    fn record_outcome(&mut self, _index: usize, _was_correct: bool) {}

    fn is_exhausted(&self) -> bool {
        self.cursor >= self.len
    }

    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

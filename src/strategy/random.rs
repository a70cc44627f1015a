use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::deck::Deck;
use crate::error::QuizError;
use crate::strategy::SelectionStrategy;

/// Each card once, in an order shuffled when the session starts.
#[derive(Debug, Clone)]
pub struct RandomOrder {
    order: Vec<usize>,
    cursor: usize,
}

impl RandomOrder {
    pub fn new<R>(len: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);
        Self { order, cursor: 0 }
    }
}

impl SelectionStrategy for RandomOrder {
    fn next_index(&mut self, _deck: &Deck) -> Result<usize, QuizError> {
        let index = *self.order.get(self.cursor).ok_or(QuizError::Exhausted)?;
        self.cursor += 1;
        trace!(index, position = self.cursor, "random pick");
        Ok(index)
    }

    fn record_outcome(&mut self, _index: usize, _was_correct: bool) {}

    fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

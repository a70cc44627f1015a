use std::mem;

use tracing::{debug, trace};

use crate::deck::Deck;
use crate::error::QuizError;
use crate::strategy::SelectionStrategy;

/// Presents every card once in deck order, then keeps coming back to the cards
/// that were missed until each has been answered correctly since its last miss.
///
/// Missed cards go to a redo list; when the current round runs out the redo
/// list becomes the next round, so a miss is always re-asked after the cards
/// already waiting ahead of it. Total presentations are capped at
/// `limit_factor * len` so a card that is never learned cannot keep the
/// session alive.
#[derive(Debug, Clone)]
pub struct AdaptiveRequeue {
    round: Vec<usize>,
    position: usize,
    redo: Vec<usize>,
    queued: Vec<bool>,
    outstanding: Vec<bool>,
    presented: usize,
    limit: usize,
    rounds: usize,
}

impl AdaptiveRequeue {
    pub fn new(len: usize, limit_factor: usize) -> Self {
        Self {
            round: (0..len).collect(),
            position: 0,
            redo: Vec::new(),
            queued: vec![false; len],
            outstanding: vec![false; len],
            presented: 0,
            limit: limit_factor.max(1).saturating_mul(len),
            rounds: 1,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Cards whose most recent answer was wrong.
    pub fn outstanding(&self) -> usize {
        self.outstanding.iter().filter(|missed| **missed).count()
    }

    fn has_pending(&self) -> bool {
        self.position < self.round.len() || !self.redo.is_empty()
    }
}

impl SelectionStrategy for AdaptiveRequeue {
    fn next_index(&mut self, _deck: &Deck) -> Result<usize, QuizError> {
        if self.presented >= self.limit {
            return if self.has_pending() {
                debug!(
                    limit = self.limit,
                    outstanding = self.outstanding(),
                    "adaptive presentation limit reached"
                );
                Err(QuizError::PresentationLimit { limit: self.limit })
            } else {
                Err(QuizError::Exhausted)
            };
        }

        if self.position >= self.round.len() {
            if self.redo.is_empty() {
                return Err(QuizError::Exhausted);
            }
            self.round = mem::take(&mut self.redo);
            self.position = 0;
            self.rounds += 1;
            debug!(
                round = self.rounds,
                cards = self.round.len(),
                "starting adaptive redo round"
            );
        }

        let index = self.round[self.position];
        self.position += 1;
        self.presented += 1;
        self.queued[index] = false;
        trace!(index, presented = self.presented, "adaptive pick");
        Ok(index)
    }

    fn record_outcome(&mut self, index: usize, was_correct: bool) {
        if index >= self.outstanding.len() {
            return;
        }
        if was_correct {
            self.outstanding[index] = false;
            return;
        }

        self.outstanding[index] = true;
        if !self.queued[index] {
            self.queued[index] = true;
            self.redo.push(index);
        }
    }

    fn is_exhausted(&self) -> bool {
        self.presented >= self.limit || !self.has_pending()
    }

    fn len(&self) -> usize {
        self.queued.len()
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn deck_of(n: usize) -> Deck {
        Deck::from_pairs((0..n).map(|i| (format!("T{i}"), format!("d{i}")))).unwrap()
    }

    /// Runs the strategy to completion, answering with `answer(index, attempt)`.
    fn drive<F>(
        strategy: &mut AdaptiveRequeue,
        deck: &Deck,
        mut answer: F,
    ) -> (Vec<usize>, QuizError)
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut served = Vec::new();
        let mut attempts = vec![0usize; deck.len()];
        loop {
            match strategy.next_index(deck) {
                Ok(index) => {
                    let correct = answer(index, attempts[index]);
                    attempts[index] += 1;
                    strategy.record_outcome(index, correct);
                    served.push(index);
                }
                Err(reason) => return (served, reason),
            }
        }
    }

    #[test]
    fn all_correct_is_a_single_pass() {
        let deck = deck_of(3);
        let mut strategy = AdaptiveRequeue::new(3, 3);
        let (served, reason) = drive(&mut strategy, &deck, |_, _| true);

        assert_eq!(served, vec![0, 1, 2]);
        assert_eq!(reason, QuizError::Exhausted);
        assert!(strategy.is_exhausted());
        assert_eq!(strategy.rounds, 1);
        assert_eq!(strategy.presented(), 3);
    }

    #[test]
    fn missed_card_comes_back_before_the_end() {
        let deck = deck_of(3);
        let mut strategy = AdaptiveRequeue::new(3, 3);
        let (served, reason) = drive(&mut strategy, &deck, |index, attempt| {
            !(index == 1 && attempt == 0)
        });

        assert_eq!(served, vec![0, 1, 2, 1]);
        assert_eq!(reason, QuizError::Exhausted);
        assert!(served.len() <= 3 * deck.len());
        assert_eq!(strategy.outstanding(), 0);
    }

    #[test]
    fn missed_cards_are_requeued_in_miss_order() {
        let deck = deck_of(4);
        let mut strategy = AdaptiveRequeue::new(4, 3);
        let (served, _) = drive(&mut strategy, &deck, |index, attempt| {
            match (index, attempt) {
                (3, 0) | (1, 0) => false,
                (3, 1) => false,
                _ => true,
            }
        });

        assert_eq!(served, vec![0, 1, 2, 3, 1, 3, 3]);
        assert_eq!(strategy.rounds, 3);
    }

    #[test]
    fn never_learned_card_hits_the_presentation_limit() {
        let deck = deck_of(2);
        let mut strategy = AdaptiveRequeue::new(2, 3);
        let (served, reason) = drive(&mut strategy, &deck, |index, _| index == 0);

        assert_eq!(served.len(), 6);
        assert_eq!(reason, QuizError::PresentationLimit { limit: 6 });
        assert!(strategy.is_exhausted());
        assert_eq!(strategy.outstanding(), 1);
    }

    #[test]
    fn limit_reached_with_nothing_pending_is_plain_exhaustion() {
        let deck = deck_of(2);
        let mut strategy = AdaptiveRequeue::new(2, 1);
        let (served, reason) = drive(&mut strategy, &deck, |_, _| true);

        assert_eq!(served, vec![0, 1]);
        assert_eq!(reason, QuizError::Exhausted);
    }

    #[test]
    fn zero_factor_still_presents_every_card() {
        let strategy = AdaptiveRequeue::new(5, 0);
        assert_eq!(strategy.limit(), 5);
    }

    #[test]
    fn huge_factor_saturates_instead_of_wrapping() {
        let deck = deck_of(2);
        let mut strategy = AdaptiveRequeue::new(2, usize::MAX);
        assert_eq!(strategy.limit(), usize::MAX);

        let (served, reason) = drive(&mut strategy, &deck, |_, _| true);
        assert_eq!(served, vec![0, 1]);
        assert_eq!(reason, QuizError::Exhausted);
    }

    proptest! {
        #[test]
        fn terminates_within_bound_and_shows_every_card(
            len in 1usize..12,
            factor in 1usize..5,
            answers in proptest::collection::vec(any::<bool>(), 0..80),
        ) {
            let deck = deck_of(len);
            let mut strategy = AdaptiveRequeue::new(len, factor);
            let mut stream = answers.into_iter();
            let (served, _) = drive(&mut strategy, &deck, |_, _| stream.next().unwrap_or(true));

            prop_assert!(served.len() <= factor * len);
            for index in 0..len {
                prop_assert!(served.contains(&index));
            }
            prop_assert!(strategy.is_exhausted());
        }
    }
}

use crate::card::CardRecord;
use crate::error::QuizError;

/// Ordered, non-empty set of cards. A card's index is its identity for the
/// whole session; the deck is never reordered.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<CardRecord>,
}

impl Deck {
    pub fn new(cards: Vec<CardRecord>) -> Result<Self, QuizError> {
        if cards.is_empty() {
            return Err(QuizError::EmptyDeck);
        }
        Ok(Deck { cards })
    }

    pub fn from_pairs<I, T, D>(pairs: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(term, definition)| CardRecord::new(term, definition))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardRecord> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CardRecord> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    pub fn record_answer(&mut self, index: usize, was_correct: bool) -> Result<(), QuizError> {
        let len = self.cards.len();
        let card = self
            .get_mut(index)
            .ok_or(QuizError::IndexOutOfRange { index, len })?;
        card.record_answer(was_correct);
        Ok(())
    }

    pub fn reset_history(&mut self) {
        for card in &mut self.cards {
            card.reset_history();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_deck() {
        assert_eq!(Deck::new(Vec::new()).unwrap_err(), QuizError::EmptyDeck);
        let empty: Vec<(&str, &str)> = Vec::new();
        assert_eq!(Deck::from_pairs(empty).unwrap_err(), QuizError::EmptyDeck);
    }

    #[test]
    fn keeps_load_order() {
        let deck = Deck::from_pairs([("DNS", "Domain Name System"), ("SSH", "Secure Shell")])
            .unwrap();
        assert_eq!(deck.len(), 2);
        let terms: Vec<&str> = deck.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["DNS", "SSH"]);
    }

    #[test]
    fn record_answer_updates_only_the_target_card() {
        let mut deck = Deck::from_pairs([("A", "a"), ("B", "b")]).unwrap();
        deck.record_answer(1, false).unwrap();

        assert_eq!(deck.get(0).unwrap().times_seen(), 0);
        assert_eq!(deck.get(1).unwrap().times_wrong(), 1);

        assert_eq!(
            deck.record_answer(2, true).unwrap_err(),
            QuizError::IndexOutOfRange { index: 2, len: 2 }
        );

        deck.reset_history();
        assert_eq!(deck.get(1).unwrap().times_seen(), 0);
    }
}

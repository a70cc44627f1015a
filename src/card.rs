#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    times_seen: u32,
    times_wrong: u32,
}

impl CardRecord {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        CardRecord {
            term: term.into(),
            definition: definition.into(),
            times_seen: 0,
            times_wrong: 0,
        }
    }

    pub fn times_seen(&self) -> u32 {
        self.times_seen
    }

    pub fn times_wrong(&self) -> u32 {
        self.times_wrong
    }

    /// Both counters move together so `times_wrong <= times_seen` always holds.
    pub fn record_answer(&mut self, was_correct: bool) {
        self.times_seen += 1;
        if !was_correct {
            self.times_wrong += 1;
        }
    }

    pub fn reset_history(&mut self) {
        self.times_seen = 0;
        self.times_wrong = 0;
    }

    pub fn error_weight(&self) -> u32 {
        1 + self.times_wrong
    }

    /// Terms like `DNS`, `U.S.A.` or `ÉTÉ` get phrased as
    /// "What does X stand for?" rather than "What is X?".
    pub fn is_acronym(&self) -> bool {
        let cleaned: String = self
            .term
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | '_'))
            .collect();
        cleaned.chars().count() >= 2
            && cleaned
                .chars()
                .all(|c| c.is_alphabetic() && c.is_uppercase())
    }
}

/// Answers match when they agree after trimming, ignoring case.
pub fn answers_match(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_has_empty_history() {
        let card = CardRecord::new("DNS", "Domain Name System");
        assert_eq!(card.times_seen(), 0);
        assert_eq!(card.times_wrong(), 0);
        assert_eq!(card.error_weight(), 1);
    }

    #[test]
    fn wrong_answers_raise_weight_and_never_exceed_seen() {
        let mut card = CardRecord::new("DNS", "Domain Name System");
        card.record_answer(false);
        card.record_answer(true);
        card.record_answer(false);

        assert_eq!(card.times_seen(), 3);
        assert_eq!(card.times_wrong(), 2);
        assert_eq!(card.error_weight(), 3);
        assert!(card.times_wrong() <= card.times_seen());

        card.reset_history();
        assert_eq!(card.times_seen(), 0);
        assert_eq!(card.error_weight(), 1);
    }

    #[test]
    fn detects_acronyms() {
        assert!(CardRecord::new("DNS", "x").is_acronym());
        assert!(CardRecord::new("U.S.A.", "x").is_acronym());
        assert!(!CardRecord::new("SSH-2", "x").is_acronym());
        assert!(!CardRecord::new("Python", "x").is_acronym());
        assert!(!CardRecord::new("A", "x").is_acronym());
        assert!(CardRecord::new("ÉTÉ", "x").is_acronym());
        assert!(CardRecord::new("ДНС", "x").is_acronym());
        assert!(!CardRecord::new("Été", "x").is_acronym());
    }

    #[test]
    fn answers_match_ignores_case_and_padding() {
        assert!(answers_match("Domain Name System", "domain name system"));
        assert!(answers_match("Domain Name System", "  DOMAIN NAME SYSTEM\n"));
        assert!(answers_match("Domain Name System", "\tDoMaIn NaMe SyStEm"));
        assert!(!answers_match("Domain Name System", "Wrong Answer"));
    }
}

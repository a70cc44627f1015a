use serde::Serialize;

/// Running tally of one quiz session.
#[derive(Debug, Default, Clone)]
pub struct SessionTracker {
    total_asked: usize,
    total_correct: usize,
    missed_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub total_asked: usize,
    pub total_correct: usize,
    pub total_incorrect: usize,
    pub accuracy_percent: f64,
    pub missed_terms: Vec<String>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, term: &str, was_correct: bool) {
        self.total_asked += 1;
        if was_correct {
            self.total_correct += 1;
        } else if !self.missed_terms.iter().any(|missed| missed == term) {
            self.missed_terms.push(term.to_string());
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total_asked: self.total_asked,
            total_correct: self.total_correct,
            total_incorrect: self.total_asked - self.total_correct,
            accuracy_percent: accuracy_percent(self.total_correct, self.total_asked),
            missed_terms: self.missed_terms.clone(),
        }
    }
}

/// Percentage rounded to one decimal, ties to even (1 of 16 is 6.2%).
/// An empty session is 0%.
pub fn accuracy_percent(correct: usize, asked: usize) -> f64 {
    if asked == 0 {
        return 0.0;
    }
    let scaled = correct * 1000;
    let mut tenths = scaled / asked;
    let remainder = scaled % asked;
    if remainder * 2 > asked || (remainder * 2 == asked && tenths % 2 == 1) {
        tenths += 1;
    }
    tenths as f64 / 10.0
}

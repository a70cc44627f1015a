use std::fmt;

use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::card::{CardRecord, answers_match};
use crate::deck::Deck;
use crate::error::QuizError;
use crate::presenter::{Feedback, Presenter, Question, Response};
use crate::stats::{SessionSummary, SessionTracker};
use crate::strategy::{QuizMode, SelectionStrategy, StrategyOptions, build_strategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// The strategy had nothing more to ask.
    Exhausted,
    UserQuit,
    /// Adaptive mode hit its presentation cap with missed cards still queued.
    PresentationLimit,
}

impl CompletionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionReason::Exhausted => "exhausted",
            CompletionReason::UserQuit => "user_quit",
            CompletionReason::PresentationLimit => "presentation_limit",
        }
    }
}

impl fmt::Display for CompletionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Running,
    Finished(CompletionReason),
}

impl SessionState {
    fn label(&self) -> &'static str {
        match self {
            SessionState::Ready => "ready",
            SessionState::Running => "running",
            SessionState::Finished(_) => "finished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub reason: CompletionReason,
    #[serde(flatten)]
    pub summary: SessionSummary,
}

/// Drives one quiz: pick a card, ask it, grade it, record it.
pub struct QuizSession {
    deck: Deck,
    strategy: Box<dyn SelectionStrategy>,
    tracker: SessionTracker,
    state: SessionState,
    presented: usize,
}

impl QuizSession {
    /// Starts from a clean card history; the strategy must have been built for
    /// this deck.
    pub fn new(mut deck: Deck, strategy: Box<dyn SelectionStrategy>) -> Result<Self, QuizError> {
        if deck.is_empty() {
            return Err(QuizError::EmptyDeck);
        }
        if strategy.len() != deck.len() {
            return Err(QuizError::DeckSizeMismatch {
                deck: deck.len(),
                strategy: strategy.len(),
            });
        }
        deck.reset_history();
        Ok(Self {
            deck,
            strategy,
            tracker: SessionTracker::new(),
            state: SessionState::Ready,
            presented: 0,
        })
    }

    pub fn from_cards<R>(
        cards: Vec<CardRecord>,
        mode: QuizMode,
        options: StrategyOptions,
        rng: &mut R,
    ) -> Result<Self, QuizError>
    where
        R: Rng + ?Sized,
    {
        let deck = Deck::new(cards)?;
        let strategy = build_strategy(mode, &deck, options, rng);
        Self::new(deck, strategy)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn summary(&self) -> SessionSummary {
        self.tracker.summary()
    }

    pub fn report(&self) -> Option<SessionReport> {
        match self.state {
            SessionState::Finished(reason) => Some(SessionReport {
                reason,
                summary: self.tracker.summary(),
            }),
            _ => None,
        }
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.state != SessionState::Ready {
            return Err(QuizError::InvalidState {
                state: self.state.label(),
            });
        }
        info!(
            cards = self.deck.len(),
            strategy = self.strategy.name(),
            "quiz session started"
        );
        self.state = SessionState::Running;
        Ok(())
    }

    /// Runs one select, ask, grade, record cycle. Returns the completion reason
    /// once the session has finished.
    pub fn step<P>(&mut self, presenter: &mut P) -> Result<Option<CompletionReason>>
    where
        P: Presenter + ?Sized,
    {
        if self.state != SessionState::Running {
            return Err(QuizError::InvalidState {
                state: self.state.label(),
            }
            .into());
        }

        let index = match self.strategy.next_index(&self.deck) {
            Ok(index) => index,
            Err(QuizError::Exhausted) => return Ok(Some(self.finish(CompletionReason::Exhausted))),
            Err(QuizError::PresentationLimit { .. }) => {
                return Ok(Some(self.finish(CompletionReason::PresentationLimit)));
            }
            Err(err) => return Err(err.into()),
        };

        let card = self
            .deck
            .get(index)
            .cloned()
            .ok_or(QuizError::IndexOutOfRange {
                index,
                len: self.deck.len(),
            })?;
        let question = Question {
            number: self.presented + 1,
            term: &card.term,
            definition: &card.definition,
            acronym: card.is_acronym(),
        };

        let given = match presenter.ask(&question)? {
            Response::Answer(text) => text,
            Response::Quit => return Ok(Some(self.finish(CompletionReason::UserQuit))),
        };

        let was_correct = answers_match(&card.definition, &given);
        self.presented += 1;
        self.deck.record_answer(index, was_correct)?;
        self.tracker.record(&card.term, was_correct);
        self.strategy.record_outcome(index, was_correct);
        debug!(index, term = %card.term, was_correct, "answer recorded");

        let feedback = if was_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                given,
                expected: card.definition.clone(),
            }
        };
        presenter.show_feedback(&question, &feedback)?;

        Ok(None)
    }

    pub fn run<P>(&mut self, presenter: &mut P) -> Result<SessionReport>
    where
        P: Presenter + ?Sized,
    {
        self.start()?;
        loop {
            if let Some(reason) = self.step(presenter)? {
                return Ok(SessionReport {
                    reason,
                    summary: self.tracker.summary(),
                });
            }
        }
    }

    fn finish(&mut self, reason: CompletionReason) -> CompletionReason {
        self.state = SessionState::Finished(reason);
        let summary = self.tracker.summary();
        info!(
            %reason,
            asked = summary.total_asked,
            correct = summary.total_correct,
            accuracy = summary.accuracy_percent,
            "quiz session finished"
        );
        reason
    }
}

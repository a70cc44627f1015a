use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::deck::Deck;
use crate::loader::load_deck;
use crate::palette::{Painter, Palette};
use crate::presenter::{LinePresenter, Presenter, TerminalPresenter};
use crate::quiz::{QuizSession, SessionReport};
use crate::report::{render_card_breakdown, render_json, render_summary};
use crate::strategy::{QuizMode, SelectionStrategy, StrategyOptions, build_strategy};
use crate::utils::pluralize;

#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub path: PathBuf,
    pub mode: QuizMode,
    pub options: StrategyOptions,
    /// Fixed seed for reproducible random and adaptive runs.
    pub seed: Option<u64>,
    pub show_stats: bool,
    pub json: bool,
}

pub fn run(config: QuizConfig) -> Result<SessionReport> {
    let deck = load_deck(&config.path)?;
    let interactive = io::stdin().is_terminal();
    let painter = Painter::new(io::stdout().is_terminal() && !config.json);
    let mut chatter = chatter_for(&config);
    let mut stdout = io::stdout();

    announce(&mut chatter, &config, &deck, painter)?;
    info!(
        path = %config.path.display(),
        mode = %config.mode,
        interactive,
        "starting quiz"
    );

    if interactive {
        let mut presenter = TerminalPresenter::with_writer(chatter);
        play(&config, deck, &mut presenter, &mut stdout, painter)
    } else {
        let mut presenter = LinePresenter::new(io::stdin().lock(), chatter);
        play(&config, deck, &mut presenter, &mut stdout, painter)
    }
}

/// Where progress text goes. With --json, stdout is reserved for the report.
fn chatter_for(config: &QuizConfig) -> Box<dyn Write> {
    if config.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

fn announce(
    chatter: &mut dyn Write,
    config: &QuizConfig,
    deck: &Deck,
    painter: Painter,
) -> Result<()> {
    writeln!(
        chatter,
        "Loaded {} from {}",
        pluralize("flashcard", deck.len()),
        painter.paint(Palette::INFO, config.path.display())
    )?;
    writeln!(
        chatter,
        "Quiz mode: {}",
        painter.paint(Palette::ACCENT, config.mode)
    )?;
    writeln!(
        chatter,
        "{}",
        painter.dim("Type your answers, or 'exit' to quit at any time.")
    )?;
    Ok(())
}

/// Runs the session through `presenter` and writes the report to `out`.
fn play<P>(
    config: &QuizConfig,
    deck: Deck,
    presenter: &mut P,
    out: &mut dyn Write,
    painter: Painter,
) -> Result<SessionReport>
where
    P: Presenter + ?Sized,
{
    let strategy = strategy_for(config, &deck);
    let mut session = QuizSession::new(deck, strategy)?;
    let report = session.run(presenter)?;

    if config.json {
        writeln!(out, "{}", render_json(&report)?)?;
    } else {
        write!(out, "{}", render_summary(&report.summary, report.reason, painter))?;
        if config.show_stats {
            write!(out, "{}", render_card_breakdown(session.deck(), painter))?;
        }
    }

    Ok(report)
}

fn strategy_for(config: &QuizConfig, deck: &Deck) -> Box<dyn SelectionStrategy> {
    match config.seed {
        Some(seed) => build_strategy(
            config.mode,
            deck,
            config.options,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => build_strategy(config.mode, deck, config.options, &mut rand::rng()),
    }
}

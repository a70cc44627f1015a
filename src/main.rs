use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueHint};

use flashquiz::commands::quiz::{self, QuizConfig};
use flashquiz::logging::init_tracing;
use flashquiz::palette::Palette;
use flashquiz::strategy::{DEFAULT_LIMIT_FACTOR, QuizMode, StrategyOptions};

#[derive(Parser, Debug)]
#[command(
    name = "flashquiz",
    version,
    about = "Flashcard quizzes in the terminal.",
    long_about = None,
    arg_required_else_help = true,
    after_help = "Examples:\n  flashquiz cards.json\n  flashquiz cards.json --mode random\n  flashquiz cards.json --mode adaptive --stats"
)]
struct Cli {
    /// JSON file containing the flashcards
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    file: PathBuf,
    /// Quiz mode: sequential, random, or adaptive
    #[arg(short, long, default_value = "sequential", value_parser = parse_mode)]
    mode: QuizMode,
    /// Adaptive mode stops after this many passes' worth of questions
    #[arg(long, value_name = "MULTIPLE", default_value_t = DEFAULT_LIMIT_FACTOR)]
    limit_factor: usize,
    /// Seed the card order for a reproducible session
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Show per-card statistics after the summary
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Print the session summary as JSON
    #[arg(long, default_value_t = false, conflicts_with = "stats")]
    json: bool,
}

fn parse_mode(value: &str) -> Result<QuizMode, flashquiz::QuizError> {
    value.parse()
}

fn main() {
    init_tracing();
    if let Err(err) = run_cli() {
        eprintln!("{}", Palette::paint(Palette::DANGER, format!("Error: {err:#}")));
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    if cli.limit_factor == 0 {
        bail!("--limit-factor must be at least 1");
    }

    quiz::run(QuizConfig {
        path: cli.file,
        mode: cli.mode,
        options: StrategyOptions {
            limit_factor: cli.limit_factor,
        },
        seed: cli.seed,
        show_stats: cli.stats,
        json: cli.json,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_mode_and_defaults() {
        let cli = Cli::try_parse_from(["flashquiz", "cards.json"]).unwrap();
        assert_eq!(cli.mode, QuizMode::Sequential);
        assert_eq!(cli.limit_factor, DEFAULT_LIMIT_FACTOR);

        let cli = Cli::try_parse_from(["flashquiz", "cards.json", "-m", "adaptive", "--seed", "9"])
            .unwrap();
        assert_eq!(cli.mode, QuizMode::Adaptive);
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = Cli::try_parse_from(["flashquiz", "cards.json", "--mode", "spaced"]).unwrap_err();
        assert!(err.to_string().contains("unknown quiz mode 'spaced'"));
    }
}

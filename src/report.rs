use anyhow::Result;

use crate::deck::Deck;
use crate::palette::{Painter, Palette};
use crate::quiz::{CompletionReason, SessionReport};
use crate::stats::SessionSummary;
use crate::utils::pluralize;

const RULE_WIDTH: usize = 50;

fn reason_line(reason: CompletionReason) -> &'static str {
    match reason {
        CompletionReason::Exhausted => "Quiz complete.",
        CompletionReason::UserQuit => "Quiz ended early.",
        CompletionReason::PresentationLimit => {
            "Stopped at the question limit; some cards still need work."
        }
    }
}

pub fn render_summary(summary: &SessionSummary, reason: CompletionReason, painter: Painter) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let accuracy_color = if summary.total_asked == 0 || summary.accuracy_percent >= 80.0 {
        Palette::SUCCESS
    } else if summary.accuracy_percent >= 50.0 {
        Palette::WARNING
    } else {
        Palette::DANGER
    };

    let mut out = String::new();
    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!(
        "{}\n",
        painter.paint(Palette::ACCENT, "Session Statistics")
    ));
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("{}\n", painter.dim(reason_line(reason))));
    out.push_str(&format!("Total Questions: {}\n", summary.total_asked));
    out.push_str(&format!("Correct Answers: {}\n", summary.total_correct));
    out.push_str(&format!("Incorrect Answers: {}\n", summary.total_incorrect));
    out.push_str(&format!(
        "Accuracy: {}\n",
        painter.paint(accuracy_color, format!("{:.1}%", summary.accuracy_percent))
    ));

    if !summary.missed_terms.is_empty() {
        out.push_str("\nTerms You Missed:\n");
        for term in &summary.missed_terms {
            out.push_str(&format!("  - {}\n", painter.paint(Palette::DANGER, term)));
        }
    }

    out.push_str(&format!("{rule}\n"));
    out
}

/// Per-card history for `--stats`, hardest cards first.
pub fn render_card_breakdown(deck: &Deck, painter: Painter) -> String {
    let mut rows: Vec<_> = deck.iter().filter(|card| card.times_seen() > 0).collect();
    rows.sort_by(|a, b| {
        b.times_wrong()
            .cmp(&a.times_wrong())
            .then(a.times_seen().cmp(&b.times_seen()))
    });

    let mut out = format!("\n{}\n", painter.paint(Palette::ACCENT, "Card Breakdown"));
    if rows.is_empty() {
        out.push_str(&format!("{}\n", painter.dim("No cards were answered.")));
        return out;
    }

    let width = rows
        .iter()
        .map(|card| card.term.chars().count())
        .max()
        .unwrap_or(0);
    for card in rows {
        let misses = match card.times_wrong() {
            0 => painter.paint(Palette::SUCCESS, "no misses"),
            1 => painter.paint(Palette::DANGER, "1 miss"),
            n => painter.paint(Palette::DANGER, format!("{n} misses")),
        };
        out.push_str(&format!(
            "  {:<width$}  {}  {}\n",
            card.term,
            painter.dim(format!("seen {}", pluralize("time", card.times_seen() as usize))),
            misses,
        ));
    }
    out
}

pub fn render_json(report: &SessionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SessionTracker;

    fn summary() -> SessionSummary {
        let mut tracker = SessionTracker::new();
        tracker.record("DNS", true);
        tracker.record("HTTP", false);
        tracker.summary()
    }

    #[test]
    fn plain_summary_lists_counts_and_misses() {
        let text = render_summary(&summary(), CompletionReason::Exhausted, Painter::new(false));
        assert!(text.contains("Session Statistics"));
        assert!(text.contains("Total Questions: 2"));
        assert!(text.contains("Correct Answers: 1"));
        assert!(text.contains("Incorrect Answers: 1"));
        assert!(text.contains("Accuracy: 50.0%"));
        assert!(text.contains("Terms You Missed:\n  - HTTP\n"));
        assert!(text.contains("Quiz complete."));
    }

    #[test]
    fn summary_mentions_early_stop() {
        let empty = SessionTracker::new().summary();
        let text = render_summary(&empty, CompletionReason::UserQuit, Painter::new(false));
        assert!(text.contains("Quiz ended early."));
        assert!(text.contains("Accuracy: 0.0%"));
        assert!(!text.contains("Terms You Missed"));
    }

    #[test]
    fn breakdown_puts_hardest_cards_first() {
        let mut deck = Deck::from_pairs([("DNS", "a"), ("HTTP", "b"), ("SSH", "c")]).unwrap();
        deck.record_answer(0, true).unwrap();
        deck.record_answer(1, false).unwrap();
        deck.record_answer(1, false).unwrap();

        let text = render_card_breakdown(&deck, Painter::new(false));
        let http = text.find("HTTP").unwrap();
        let dns = text.find("DNS").unwrap();
        assert!(http < dns);
        assert!(text.contains("2 misses"));
        assert!(text.contains("no misses"));
        assert!(!text.contains("SSH"));
    }

    #[test]
    fn json_report_is_flat() {
        let report = SessionReport {
            reason: CompletionReason::UserQuit,
            summary: summary(),
        };
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["reason"], "user_quit");
        assert_eq!(value["total_asked"], 2);
        assert_eq!(value["accuracy_percent"], 50.0);
        assert_eq!(value["missed_terms"][0], "HTTP");
    }
}

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::card::CardRecord;
use crate::deck::Deck;
use crate::utils::{is_json, trim_line};

/// The three layouts accepted for a deck file.
#[derive(Deserialize)]
#[serde(untagged)]
enum DeckFile {
    List(Vec<Value>),
    Keyed(serde_json::Map<String, Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCard {
    FrontBack { front: Value, back: Value },
    TermDefinition { term: Value, definition: Value },
}

pub fn load_deck(path: &Path) -> Result<Deck> {
    if !is_json(path) {
        warn!(path = %path.display(), "deck file does not have a .json extension");
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            bail!("Flashcard file not found: {}", path.display())
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let deck = parse_deck(&contents).with_context(|| format!("Invalid deck {}", path.display()))?;
    debug!(path = %path.display(), cards = deck.len(), "deck loaded");
    Ok(deck)
}

pub fn parse_deck(contents: &str) -> Result<Deck> {
    let root: Value =
        serde_json::from_str(contents).map_err(|err| anyhow!("Invalid JSON format: {err}"))?;

    let items = match serde_json::from_value::<DeckFile>(root) {
        Ok(DeckFile::List(items)) => items,
        Ok(DeckFile::Keyed(mut object)) => {
            let collection = object
                .remove("cards")
                .or_else(|| object.remove("flashcards"))
                .ok_or_else(|| anyhow!("JSON object must contain 'cards' or 'flashcards' key"))?;
            match collection {
                Value::Array(items) => items,
                _ => bail!("Flashcards data must be a list"),
            }
        }
        Err(_) => bail!("JSON root must be an array or object"),
    };

    if items.is_empty() {
        bail!("Flashcards list cannot be empty");
    }

    let cards = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| parse_card(idx, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(Deck::new(cards)?)
}

fn parse_card(idx: usize, item: Value) -> Result<CardRecord> {
    if !item.is_object() {
        bail!("Flashcard at index {idx} must be an object");
    }

    let (term, definition) = match serde_json::from_value::<RawCard>(item) {
        Ok(RawCard::FrontBack { front, back }) => (front, back),
        Ok(RawCard::TermDefinition { term, definition }) => (term, definition),
        Err(_) => bail!(
            "Flashcard at index {idx} must have either 'front'/'back' or 'term'/'definition' keys"
        ),
    };

    let term = required_text(&term)
        .with_context(|| format!("Invalid flashcard at index {idx}: term"))?;
    let definition = required_text(&definition)
        .with_context(|| format!("Invalid flashcard at index {idx}: definition"))?;

    Ok(CardRecord::new(term, definition))
}

fn required_text(value: &Value) -> Result<&str> {
    value
        .as_str()
        .and_then(trim_line)
        .ok_or_else(|| anyhow!("must be a non-empty string"))
}

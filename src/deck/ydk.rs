//! Plain-text deck list (`.ydk`) codec.
//!
//! The format is three sections in a fixed order (a comment line,
//! `#main`, `#extra`, `!side`) with one numeric card id per line.
//! Parsing classifies lines by the most recent section header and
//! ignores everything that is neither a header nor a run of digits.

use serde::{Deserialize, Serialize};

use super::sections::{Deck, DeckSection};
use crate::cards::CardId;
use crate::error::{DeckError, Result};

const EXPORT_COMMENT: &str = "#created by ygo-deck-core";

/// Per-section card-id lists, the parsed form of a deck file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    pub main: Vec<CardId>,
    pub extra: Vec<CardId>,
    pub side: Vec<CardId>,
}

impl DeckList {
    /// Whether all three sections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.extra.is_empty() && self.side.is_empty()
    }

    /// All ids in section order, duplicates preserved.
    pub fn all_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.main
            .iter()
            .chain(self.extra.iter())
            .chain(self.side.iter())
            .copied()
    }
}

/// Render a deck to the text format.
///
/// Extra and side are validated against their capacities first: an
/// ungated import can overfill them, and such a deck must not round-trip
/// silently.
pub fn export(deck: &Deck) -> Result<String> {
    for section in [DeckSection::Extra, DeckSection::Side] {
        let len = deck.len(section);
        if len > section.capacity() {
            return Err(DeckError::SectionOverflow {
                section,
                len,
                capacity: section.capacity(),
            });
        }
    }

    let mut out = String::new();
    out.push_str(EXPORT_COMMENT);
    out.push('\n');
    for (header, section) in [
        ("#main", DeckSection::Main),
        ("#extra", DeckSection::Extra),
        ("!side", DeckSection::Side),
    ] {
        out.push_str(header);
        out.push('\n');
        for card in deck.cards(section) {
            out.push_str(&card.id.raw().to_string());
            out.push('\n');
        }
    }
    Ok(out)
}

/// Parse the text format into per-section id lists.
///
/// Digit-only lines join the section of the last header seen; digit
/// lines before any header, and all other lines, are ignored.
#[must_use]
pub fn parse(text: &str) -> DeckList {
    let mut list = DeckList::default();
    let mut current: Option<DeckSection> = None;

    for line in text.lines() {
        let line = line.trim();
        match line {
            "#main" => current = Some(DeckSection::Main),
            "#extra" => current = Some(DeckSection::Extra),
            "!side" => current = Some(DeckSection::Side),
            _ => {
                if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
                    continue;
                }
                let Ok(id) = line.parse::<u32>() else {
                    continue;
                };
                match current {
                    Some(DeckSection::Main) => list.main.push(CardId::new(id)),
                    Some(DeckSection::Extra) => list.extra.push(CardId::new(id)),
                    Some(DeckSection::Side) => list.side.push(CardId::new(id)),
                    None => {}
                }
            }
        }
    }

    list
}

//! Deck containers: the three ordered sections and their mutations.
//!
//! Sections are `im::Vector`s so every deck-changed notification can hand
//! observers a complete snapshot in O(1). Order is display order: it
//! changes through insertion, removal, drag-reorder, and the canonical
//! sort.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::ordering::{compare_extra, compare_main_side};
use crate::cards::{Card, CardId};

/// The three deck zones and their capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckSection {
    Main,
    Extra,
    Side,
}

impl DeckSection {
    /// Every section, in display order.
    pub const ALL: [DeckSection; 3] = [DeckSection::Main, DeckSection::Extra, DeckSection::Side];

    /// Maximum cards the section holds.
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            DeckSection::Main => 60,
            DeckSection::Extra => 15,
            DeckSection::Side => 15,
        }
    }
}

impl std::fmt::Display for DeckSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeckSection::Main => "main",
            DeckSection::Extra => "extra",
            DeckSection::Side => "side",
        };
        write!(f, "{name}")
    }
}

/// A deck under construction.
///
/// Mutations here are unchecked: the admission gate lives in
/// [`legality`](crate::legality) and is applied by the session. Imports
/// deliberately bypass the gate, so a `Deck` can hold sections beyond
/// their capacity; the exporter validates before writing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    main: Vector<Card>,
    extra: Vector<Card>,
    side: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn section_ref(&self, section: DeckSection) -> &Vector<Card> {
        match section {
            DeckSection::Main => &self.main,
            DeckSection::Extra => &self.extra,
            DeckSection::Side => &self.side,
        }
    }

    fn section_mut(&mut self, section: DeckSection) -> &mut Vector<Card> {
        match section {
            DeckSection::Main => &mut self.main,
            DeckSection::Extra => &mut self.extra,
            DeckSection::Side => &mut self.side,
        }
    }

    /// Number of cards in a section.
    #[must_use]
    pub fn len(&self, section: DeckSection) -> usize {
        self.section_ref(section).len()
    }

    /// Total cards across all three sections.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.main.len() + self.extra.len() + self.side.len()
    }

    /// Whether all three sections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Whether a section is at (or beyond) its capacity.
    #[must_use]
    pub fn is_full(&self, section: DeckSection) -> bool {
        self.len(section) >= section.capacity()
    }

    /// Cards of one section, in display order.
    pub fn cards(&self, section: DeckSection) -> impl Iterator<Item = &Card> {
        self.section_ref(section).iter()
    }

    /// Card at a position in a section.
    #[must_use]
    pub fn get(&self, section: DeckSection, index: usize) -> Option<&Card> {
        self.section_ref(section).get(index)
    }

    /// All cards, main then extra then side.
    pub fn iter_all(&self) -> impl Iterator<Item = &Card> {
        self.main.iter().chain(self.extra.iter()).chain(self.side.iter())
    }

    /// Copies of a card across all three sections.
    ///
    /// Counts exact `id` equality only, never `cid`, so reprints with
    /// a shared alternate id are not conflated.
    #[must_use]
    pub fn count_copies(&self, id: CardId) -> usize {
        self.iter_all().filter(|card| card.id == id).count()
    }

    /// Append a card to a section, unchecked.
    pub fn push(&mut self, section: DeckSection, card: Card) {
        self.section_mut(section).push_back(card);
    }

    /// Remove and return the card at a position.
    pub fn remove(&mut self, section: DeckSection, index: usize) -> Option<Card> {
        let cards = self.section_mut(section);
        if index >= cards.len() {
            return None;
        }
        Some(cards.remove(index))
    }

    /// Move a card within its section (drag-reorder).
    ///
    /// Returns `false` (deck unchanged) for out-of-range positions; a
    /// same-position move is a successful no-op.
    pub fn reorder(&mut self, section: DeckSection, from: usize, to: usize) -> bool {
        let cards = self.section_mut(section);
        if from >= cards.len() || to >= cards.len() {
            return false;
        }
        if from != to {
            let card = cards.remove(from);
            cards.insert(to, card);
        }
        true
    }

    /// Move a card across sections (drag between grids).
    ///
    /// Main↔extra moves are rejected: extra types cannot live in main
    /// and vice versa; both exchange with side freely. The insert index
    /// clamps to the destination's end, which is also where drops on
    /// empty space land. Returns `false` if nothing moved.
    pub fn move_card(
        &mut self,
        from: DeckSection,
        from_index: usize,
        to: DeckSection,
        to_index: usize,
    ) -> bool {
        let blocked = matches!(
            (from, to),
            (DeckSection::Main, DeckSection::Extra) | (DeckSection::Extra, DeckSection::Main)
        );
        if blocked {
            return false;
        }
        if from == to {
            let len = self.len(from);
            return self.reorder(from, from_index, to_index.min(len.saturating_sub(1)));
        }
        let Some(card) = self.remove(from, from_index) else {
            return false;
        };
        let target = self.section_mut(to);
        let index = to_index.min(target.len());
        target.insert(index, card);
        true
    }

    /// Empty all three sections.
    pub fn clear(&mut self) {
        self.main = Vector::new();
        self.extra = Vector::new();
        self.side = Vector::new();
    }

    /// Sort every section into canonical display order.
    ///
    /// Main and side use [`compare_main_side`]; extra uses
    /// [`compare_extra`]. The comparators are partial orders (spells and
    /// traps stop at the sub-rank), so the sort must be stable.
    pub fn sort(&mut self) {
        Self::stable_sort(&mut self.main, compare_main_side);
        Self::stable_sort(&mut self.side, compare_main_side);
        Self::stable_sort(&mut self.extra, compare_extra);
    }

    // im's sort is not stable; round-trip through a Vec for std's.
    fn stable_sort(cards: &mut Vector<Card>, cmp: fn(&Card, &Card) -> std::cmp::Ordering) {
        let mut sorted: Vec<Card> = cards.iter().cloned().collect();
        sorted.sort_by(cmp);
        *cards = sorted.into_iter().collect();
    }
}

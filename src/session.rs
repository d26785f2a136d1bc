//! Session context: deck state, active format, reference data, and
//! change notification.
//!
//! A `Session` is created empty at startup, reset by `clear_decks`, and
//! dropped at session end. Every UI event that touches the deck routes
//! through it: the session applies the admission gate, mutates, and then
//! notifies observers so derived views (rendering, point totals) can
//! recompute. All operations run synchronously to completion.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId};
use crate::deck::{ydk, Deck, DeckList, DeckSection};
use crate::error::{DeckError, Result};
use crate::formats::Format;
use crate::genesys::GenesysStore;
use crate::legality::{can_add, Verdict};
use crate::restrictions::RestrictionStore;
use crate::sources::CardCatalog;

/// Observer notified after every deck mutation.
///
/// The deck handed over is the live state; clone it for a snapshot.
/// The sections are persistent vectors, so cloning is O(1).
pub trait DeckObserver {
    fn deck_changed(&mut self, deck: &Deck);
}

/// The process-wide deck-building context.
pub struct Session {
    deck: Deck,
    format: Format,
    restrictions: RestrictionStore,
    genesys: GenesysStore,
    observers: Vec<Box<dyn DeckObserver>>,
}

impl Session {
    /// Create an empty session over the two reference-data stores.
    ///
    /// The initial format is OCG.
    #[must_use]
    pub fn new(restrictions: RestrictionStore, genesys: GenesysStore) -> Self {
        Self {
            deck: Deck::new(),
            format: Format::Ocg,
            restrictions,
            genesys,
            observers: Vec::new(),
        }
    }

    /// Set the starting format (builder pattern).
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Current deck state.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Active format.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// The banlist store.
    #[must_use]
    pub fn restrictions(&self) -> &RestrictionStore {
        &self.restrictions
    }

    /// The GENESYS index store.
    #[must_use]
    pub fn genesys(&self) -> &GenesysStore {
        &self.genesys
    }

    /// Register a deck-changed observer.
    pub fn add_observer(&mut self, observer: Box<dyn DeckObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self) {
        let deck = &self.deck;
        for observer in &mut self.observers {
            observer.deck_changed(deck);
        }
    }

    /// Gate and append a card. The deck is unchanged on rejection.
    pub fn add_card(&mut self, card: Card, section: DeckSection) -> Verdict {
        let status = self.restrictions.status_for(&card, self.format);
        let verdict = can_add(&card, section, &self.deck, status);
        if verdict.is_admitted() {
            self.deck.push(section, card);
            self.notify();
        }
        verdict
    }

    /// Remove the card at a position.
    pub fn remove_card(&mut self, section: DeckSection, index: usize) -> Option<Card> {
        let removed = self.deck.remove(section, index);
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    /// Drag-reorder within a section.
    pub fn reorder(&mut self, section: DeckSection, from: usize, to: usize) -> bool {
        let moved = self.deck.reorder(section, from, to);
        if moved {
            self.notify();
        }
        moved
    }

    /// Drag a card across sections. Main↔extra moves are rejected.
    pub fn move_card(
        &mut self,
        from: DeckSection,
        from_index: usize,
        to: DeckSection,
        to_index: usize,
    ) -> bool {
        let moved = self.deck.move_card(from, from_index, to, to_index);
        if moved {
            self.notify();
        }
        moved
    }

    /// Sort all three sections into canonical display order.
    pub fn sort_decks(&mut self) {
        self.deck.sort();
        self.notify();
    }

    /// Empty all three sections.
    pub fn clear_decks(&mut self) {
        self.deck.clear();
        self.notify();
    }

    /// Switch the active format.
    ///
    /// Deck contents are untouched; observers are notified so totals and
    /// filters recompute under the new rules.
    pub fn set_format(&mut self, format: Format) {
        if self.format != format {
            self.format = format;
            self.notify();
        }
    }

    /// Deck point total, when the GENESYS format is active.
    ///
    /// `None` under every other format; whether to show a zero is the
    /// presentation layer's call.
    #[must_use]
    pub fn genesys_total(&self) -> Option<i64> {
        if self.format == Format::Genesys {
            Some(self.genesys.index().deck_total(&self.deck))
        } else {
            None
        }
    }

    /// Refresh all reference data wholesale (banlists, then the GENESYS
    /// index). Fails fast with [`DeckError::RefreshBusy`] if either store
    /// has a refresh outstanding.
    pub fn refresh_reference_data(&self) -> Result<()> {
        self.restrictions.refresh()?;
        self.genesys.refresh()
    }

    /// Resolve a parsed deck list through the catalog and replace the
    /// whole deck with it.
    ///
    /// Order and duplicates are preserved per section. Ids the catalog
    /// cannot resolve are skipped. The admission gate is not applied to
    /// imported lists, so sections can come back overfull; the exporter
    /// validates capacities on the way out. A catalog failure leaves the
    /// deck untouched.
    pub fn import_decklist(&mut self, list: &DeckList, catalog: &dyn CardCatalog) -> Result<()> {
        let mut resolved: FxHashMap<CardId, Card> = FxHashMap::default();
        for id in list.all_ids() {
            if resolved.contains_key(&id) {
                continue;
            }
            let results = catalog
                .lookup(&id.raw().to_string())
                .ok_or(DeckError::CatalogFailure)?;
            match results.into_iter().find(|card| card.id == id) {
                Some(card) => {
                    resolved.insert(id, card);
                }
                None => {
                    tracing::debug!("{} not resolved by catalog, skipping", id);
                }
            }
        }

        self.deck.clear();
        for (section, ids) in [
            (DeckSection::Main, &list.main),
            (DeckSection::Extra, &list.extra),
            (DeckSection::Side, &list.side),
        ] {
            for id in ids {
                if let Some(card) = resolved.get(id) {
                    self.deck.push(section, card.clone());
                }
            }
        }
        self.notify();
        Ok(())
    }

    /// Render the current deck to the deck-file text format.
    pub fn export_decklist(&self) -> Result<String> {
        ydk::export(&self.deck)
    }
}

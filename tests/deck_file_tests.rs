//! Deck-file import/export tests.
//!
//! Round-trips through the text format, catalog resolution during
//! import, and the ungated-import / validated-export pairing.

use ygo_deck_core::deck::ydk;
use ygo_deck_core::{
    Banlist, Card, CardCatalog, CardId, DeckError, DeckList, DeckSection, GenesysSource,
    GenesysStore, RejectReason, RestrictionSource, RestrictionStore, Result, Session, Verdict,
};

struct EmptySource;

impl RestrictionSource for EmptySource {
    fn fetch(&self, _list: Banlist) -> Result<String> {
        Ok("{}".to_string())
    }
}

impl GenesysSource for EmptySource {
    fn fetch_scores(&self) -> Result<String> {
        Ok("{}".to_string())
    }

    fn fetch_name_ids(&self) -> Result<String> {
        Ok("{}".to_string())
    }
}

fn session() -> Session {
    Session::new(
        RestrictionStore::new(Box::new(EmptySource)),
        GenesysStore::new(Box::new(EmptySource)),
    )
}

struct MemoryCatalog {
    cards: Vec<Card>,
}

impl MemoryCatalog {
    fn of_ids(ids: &[u32]) -> Self {
        Self {
            cards: ids.iter().map(|&id| Card::new(CardId::new(id))).collect(),
        }
    }
}

impl CardCatalog for MemoryCatalog {
    fn lookup(&self, query: &str) -> Option<Vec<Card>> {
        let id: u32 = query.parse().ok()?;
        Some(
            self.cards
                .iter()
                .filter(|card| card.id.raw() == id)
                .cloned()
                .collect(),
        )
    }
}

struct FailingCatalog;

impl CardCatalog for FailingCatalog {
    fn lookup(&self, _query: &str) -> Option<Vec<Card>> {
        None
    }
}

fn ids(list: &[u32]) -> Vec<CardId> {
    list.iter().map(|&raw| CardId::new(raw)).collect()
}

/// Export then import reproduces the same per-section id lists.
#[test]
fn test_round_trip() {
    let catalog = MemoryCatalog::of_ids(&[1, 2, 3, 9]);
    let mut session = session();

    let list = DeckList {
        main: ids(&[1, 2, 2, 3]),
        extra: ids(&[9]),
        side: ids(&[3]),
    };
    session.import_decklist(&list, &catalog).unwrap();

    let text = session.export_decklist().unwrap();
    let parsed = ydk::parse(&text);
    assert_eq!(parsed, list);
}

/// Import preserves order and duplicates within each section.
#[test]
fn test_import_preserves_order_and_duplicates() {
    let catalog = MemoryCatalog::of_ids(&[5, 6]);
    let mut session = session();

    let list = DeckList {
        main: ids(&[6, 5, 6]),
        extra: vec![],
        side: vec![],
    };
    session.import_decklist(&list, &catalog).unwrap();

    let got: Vec<u32> = session
        .deck()
        .cards(DeckSection::Main)
        .map(|c| c.id.raw())
        .collect();
    assert_eq!(got, [6, 5, 6]);
}

/// Ids the catalog cannot resolve are skipped, not errors.
#[test]
fn test_import_skips_unresolved_ids() {
    let catalog = MemoryCatalog::of_ids(&[1]);
    let mut session = session();

    let list = DeckList {
        main: ids(&[1, 404, 1]),
        extra: vec![],
        side: vec![],
    };
    session.import_decklist(&list, &catalog).unwrap();
    assert_eq!(session.deck().len(DeckSection::Main), 2);
}

/// Imports bypass the admission gate: a list with four copies loads as
/// is, and only then does the gate refuse a fifth.
#[test]
fn test_import_bypasses_gate() {
    let catalog = MemoryCatalog::of_ids(&[1]);
    let mut session = session();

    let list = DeckList {
        main: ids(&[1, 1, 1, 1]),
        extra: vec![],
        side: vec![],
    };
    session.import_decklist(&list, &catalog).unwrap();
    assert_eq!(session.deck().count_copies(CardId::new(1)), 4);

    assert_eq!(
        session.add_card(Card::new(CardId::new(1)), DeckSection::Main),
        Verdict::Rejected(RejectReason::CopyLimit)
    );

    // Main has no export-side cap; the overfull list still writes out.
    assert!(session.export_decklist().is_ok());
}

/// An import can overfill extra/side; export then refuses.
#[test]
fn test_overfull_side_blocks_export() {
    let raw_ids: Vec<u32> = (1..=16).collect();
    let catalog = MemoryCatalog::of_ids(&raw_ids);
    let mut session = session();

    let list = DeckList {
        main: vec![],
        extra: vec![],
        side: ids(&raw_ids),
    };
    session.import_decklist(&list, &catalog).unwrap();
    assert_eq!(session.deck().len(DeckSection::Side), 16);

    let err = session.export_decklist().unwrap_err();
    assert!(matches!(
        err,
        DeckError::SectionOverflow {
            section: DeckSection::Side,
            len: 16,
            ..
        }
    ));
}

/// A catalog failure aborts the import and leaves the deck untouched.
#[test]
fn test_catalog_failure_leaves_deck() {
    let mut session = session();
    session.add_card(Card::new(CardId::new(7)), DeckSection::Main);

    let list = DeckList {
        main: ids(&[1]),
        extra: vec![],
        side: vec![],
    };
    let err = session.import_decklist(&list, &FailingCatalog).unwrap_err();
    assert!(matches!(err, DeckError::CatalogFailure));
    assert_eq!(session.deck().len(DeckSection::Main), 1);
    assert_eq!(
        session.deck().get(DeckSection::Main, 0).unwrap().id,
        CardId::new(7)
    );
}

/// Import replaces the previous deck wholesale.
#[test]
fn test_import_replaces_existing_deck() {
    let catalog = MemoryCatalog::of_ids(&[2]);
    let mut session = session();
    session.add_card(Card::new(CardId::new(1)), DeckSection::Main);

    let list = DeckList {
        main: ids(&[2]),
        extra: vec![],
        side: vec![],
    };
    session.import_decklist(&list, &catalog).unwrap();

    let got: Vec<u32> = session
        .deck()
        .cards(DeckSection::Main)
        .map(|c| c.id.raw())
        .collect();
    assert_eq!(got, [2]);
}

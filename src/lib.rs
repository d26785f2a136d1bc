//! # ygo-deck-core
//!
//! Deck legality, ordering, and scoring engine for Yu-Gi-Oh! deck
//! building.
//!
//! ## Design Principles
//!
//! 1. **Gated Mutation**: every "add card" passes the legality gate
//!    (format restrictions, the universal copy cap, section capacity)
//!    before deck state changes.
//!
//! 2. **Snapshot Reference Data**: banlists and score tables load lazily,
//!    are handed out as `Arc` snapshots, and are replaced wholesale on
//!    refresh. Readers never observe a partially loaded table.
//!
//! 3. **Structured Verdicts**: expected rejections are values with
//!    reportable reasons, not errors. Broken reference data degrades to
//!    "unrestricted"; the universal copy cap always holds.
//!
//! ## Architecture
//!
//! - **Single-Threaded Core**: all operations run synchronously inside
//!   one event-handler invocation. Asynchrony stays at the perimeter
//!   behind the source traits.
//!
//! - **Persistent Deck Sequences**: sections are `im::Vector`s, so the
//!   deck-changed notification can hand observers O(1) snapshots.
//!
//! ## Modules
//!
//! - `cards`: card records, categories, level/link resolution
//! - `deck`: sections, canonical ordering, the deck-file codec
//! - `formats`: the format selector and its banlists
//! - `restrictions`: status normalization, lookup tables, cached store
//! - `genesys`: point index, deck totals, display filter
//! - `legality`: the admission gate
//! - `session`: deck state + format + stores + observer notification
//! - `sources`: collaborator contracts (catalog, data feeds)
//! - `error`: crate error type

pub mod cards;
pub mod deck;
pub mod error;
pub mod formats;
pub mod genesys;
pub mod legality;
pub mod restrictions;
pub mod session;
pub mod sources;

// Re-export commonly used types
pub use crate::cards::{
    card_groups, category_of, extra_category_of, is_extra_monster, link_markers, monster_level,
    Card, CardCategory, CardId, ExtraCategory, MonsterKind, SpellKind, TrapKind,
};

pub use crate::deck::{compare_extra, compare_main_side, Deck, DeckList, DeckSection};

pub use crate::error::{DeckError, Result};

pub use crate::formats::{Banlist, Format};

pub use crate::genesys::{
    filter_display, is_genesys_displayable, normalize_name, GenesysIndex, GenesysSource,
    GenesysStore,
};

pub use crate::legality::{can_add, RejectReason, Verdict};

pub use crate::restrictions::{
    normalize_status, LookupMode, RestrictionMap, RestrictionSource, RestrictionStatus,
    RestrictionStore,
};

pub use crate::session::{DeckObserver, Session};

pub use crate::sources::CardCatalog;

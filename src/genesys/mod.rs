//! GENESYS point-budget format support.
//!
//! ## Key Types
//!
//! - `GenesysIndex`: id-keyed and normalized-name-keyed point lookup
//! - `GenesysStore`: lazily-loading cache over a `GenesysSource`
//!
//! Point-cap enforcement is a presentation concern; the core resolves
//! per-card points and deck totals. The format also hides pendulum and
//! link cards from search listings: a content filter, not a legality
//! rejection.

pub mod index;
pub mod store;

pub use index::{normalize_name, GenesysIndex};
pub use store::{GenesysSource, GenesysStore};

use crate::cards::Card;
use crate::formats::Format;

/// Whether a card may appear in GENESYS search listings.
///
/// Pendulum and link types are excluded from display under the format.
#[must_use]
pub fn is_genesys_displayable(card: &Card) -> bool {
    !(card.type_tags.contains("灵摆") || card.type_tags.contains("连接"))
}

/// Apply the format's display filter to a search-result list.
///
/// Outside GENESYS the list passes through unchanged.
#[must_use]
pub fn filter_display(cards: Vec<Card>, format: Format) -> Vec<Card> {
    if format == Format::Genesys {
        cards.into_iter().filter(is_genesys_displayable).collect()
    } else {
        cards
    }
}

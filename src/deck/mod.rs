//! Deck state: sections, ordering, and the deck-file codec.
//!
//! ## Key Types
//!
//! - `DeckSection`: main / extra / side with fixed capacities (60/15/15)
//! - `Deck`: the three ordered sequences, mutated by append, removal,
//!   drag-reorder, cross-section moves, and the canonical sort
//! - `DeckList`: per-section id lists, the parsed form of a deck file
//!
//! Deck mutations are unchecked here; the admission gate lives in
//! [`legality`](crate::legality).

pub mod ordering;
pub mod sections;
pub mod ydk;

pub use ordering::{compare_extra, compare_main_side};
pub use sections::{Deck, DeckSection};
pub use ydk::DeckList;

//! The admission gate for deck mutations.
//!
//! Every "add card" flows through [`can_add`] before the deck changes.
//! The gate owns quantity rules only; which sections a card may even
//! target is decided by [`card_groups`](crate::cards::card_groups) at
//! the call site.

pub mod engine;

pub use engine::{can_add, RejectReason, Verdict};

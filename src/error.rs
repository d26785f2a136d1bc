//! Crate error type.
//!
//! Expected legality rejections are not errors: the admission gate returns
//! a structured [`Verdict`](crate::legality::Verdict) instead. `DeckError`
//! covers reference-data refresh problems, export validation, and catalog
//! failures during import.

use thiserror::Error;

use crate::deck::DeckSection;

/// Errors surfaced by the deck core.
#[derive(Error, Debug)]
pub enum DeckError {
    /// A reference-data refresh was requested while one is outstanding.
    /// Refreshes are rejected rather than queued.
    #[error("a reference data refresh is already in progress")]
    RefreshBusy,

    /// A reference-data fetch failed at the perimeter.
    #[error("failed to fetch {what}: {message}")]
    Fetch {
        /// What was being fetched (e.g. "OCG banlist").
        what: &'static str,
        /// Source-reported failure detail.
        message: String,
    },

    /// A deck section exceeds its capacity. Possible after an ungated
    /// import; caught when exporting.
    #[error("{section} deck has {len} cards, above its limit of {capacity}")]
    SectionOverflow {
        /// The overfull section.
        section: DeckSection,
        /// Cards currently in the section.
        len: usize,
        /// The section's capacity.
        capacity: usize,
    },

    /// The card catalog reported failure for a lookup.
    #[error("card catalog lookup failed")]
    CatalogFailure,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DeckError>;

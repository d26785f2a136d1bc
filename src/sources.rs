//! Collaborator contracts.
//!
//! The core consumes three external data feeds; their implementations
//! (HTTP clients, bundled files) live outside the crate. The reference
//! data traits sit next to their stores and are re-exported here:
//! [`RestrictionSource`] and [`GenesysSource`].

use crate::cards::Card;

pub use crate::genesys::GenesysSource;
pub use crate::restrictions::RestrictionSource;

/// Remote card catalog search.
pub trait CardCatalog {
    /// Cards matching a query string (name fragment or numeric id).
    ///
    /// `None` signals a failed lookup, as distinct from `Some(vec![])`
    /// for a search with no results.
    fn lookup(&self, query: &str) -> Option<Vec<Card>>;
}

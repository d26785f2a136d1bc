//! Forbidden/limited list handling.
//!
//! ## Key Types
//!
//! - `RestrictionStatus`: the four normalized statuses and their copy caps
//! - `RestrictionMap`: one list's lookup table with the key precedence
//!   chain (cid, id, names, substring fallback)
//! - `RestrictionStore`: lazily-loading cache over a `RestrictionSource`,
//!   refreshed wholesale
//!
//! Every degradation path (fetch failure, malformed JSON) lands on an
//! empty table: legality then enforces only the universal copy cap.

pub mod map;
pub mod status;
pub mod store;

pub use map::{LookupMode, RestrictionMap};
pub use status::{normalize_status, RestrictionStatus};
pub use store::{RestrictionSource, RestrictionStore};

//! Format (mode) selection.
//!
//! A single process-wide selector decides which restriction list or score
//! table governs legality checks and display. Switching formats never
//! mutates deck contents.

use serde::{Deserialize, Serialize};

/// The active ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Japanese list.
    Ocg,
    /// Western list.
    Tcg,
    /// Simplified-Chinese list.
    Cn,
    /// Asian-English list.
    Ae,
    /// Point-budget format; no banlist, scored per card.
    Genesys,
    /// No banlist at all; only the universal copy cap applies.
    NoForbidden,
}

impl Format {
    /// Every selectable format.
    pub const ALL: [Format; 6] = [
        Format::Ocg,
        Format::Tcg,
        Format::Cn,
        Format::Ae,
        Format::Genesys,
        Format::NoForbidden,
    ];

    /// The banlist backing this format, if it has one.
    ///
    /// `Genesys` and `NoForbidden` are not banlist-governed: every card
    /// resolves as unrestricted under them (the universal copy cap still
    /// applies at the admission gate).
    #[must_use]
    pub const fn banlist(self) -> Option<Banlist> {
        match self {
            Format::Ocg => Some(Banlist::Ocg),
            Format::Tcg => Some(Banlist::Tcg),
            Format::Cn => Some(Banlist::Cn),
            Format::Ae => Some(Banlist::Ae),
            Format::Genesys | Format::NoForbidden => None,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Ocg => "OCG",
            Format::Tcg => "TCG",
            Format::Cn => "CN",
            Format::Ae => "AE",
            Format::Genesys => "GENESYS",
            Format::NoForbidden => "NO_FORBIDDEN",
        };
        write!(f, "{name}")
    }
}

/// The four maintained forbidden/limited lists.
///
/// Each list publishes its own status vocabulary; see
/// [`normalize_status`](crate::restrictions::normalize_status).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Banlist {
    Ocg,
    Tcg,
    Cn,
    Ae,
}

impl Banlist {
    /// Every maintained list.
    pub const ALL: [Banlist; 4] = [Banlist::Ocg, Banlist::Tcg, Banlist::Cn, Banlist::Ae];
}

impl std::fmt::Display for Banlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Banlist::Ocg => "OCG",
            Banlist::Tcg => "TCG",
            Banlist::Cn => "CN",
            Banlist::Ae => "AE",
        };
        write!(f, "{name}")
    }
}

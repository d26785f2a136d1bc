//! Restriction status vocabulary and normalization.
//!
//! Each banlist publishes its own labels: Japanese 制限/準制限, English
//! "Limited"/"Semi-Limited", Chinese 限制/准限制 (with 半限制 as a variant).
//! Normalization collapses all of them into exactly four statuses.

use serde::{Deserialize, Serialize};

use crate::formats::Banlist;

/// Normalized restriction of a card under one banlist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestrictionStatus {
    /// May not be in the deck at all.
    Forbidden,
    /// At most 1 copy across main, extra, and side.
    Limited,
    /// At most 2 copies across main, extra, and side.
    SemiLimited,
    /// Only the universal 3-copy cap applies.
    #[default]
    Unrestricted,
}

impl RestrictionStatus {
    /// Copies allowed across all three deck sections.
    #[must_use]
    pub const fn max_copies(self) -> usize {
        match self {
            RestrictionStatus::Forbidden => 0,
            RestrictionStatus::Limited => 1,
            RestrictionStatus::SemiLimited => 2,
            RestrictionStatus::Unrestricted => 3,
        }
    }
}

impl std::fmt::Display for RestrictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RestrictionStatus::Forbidden => "禁止",
            RestrictionStatus::Limited => "限制",
            RestrictionStatus::SemiLimited => "准限制",
            RestrictionStatus::Unrestricted => "",
        };
        write!(f, "{label}")
    }
}

/// Collapse a raw source label into a normalized status.
///
/// Pass the banlist the label came from so its vocabulary applies; pass
/// `None` for labels of unknown provenance, which get generic keyword
/// checks. Empty and unrecognized labels normalize to unrestricted.
#[must_use]
pub fn normalize_status(raw: &str, source: Option<Banlist>) -> RestrictionStatus {
    let s = raw.trim();
    if s.is_empty() {
        return RestrictionStatus::Unrestricted;
    }
    let lower = s.to_lowercase();
    match source {
        Some(Banlist::Cn) => {
            // 准限制 must match before 限制; a bare 准 or a 半…限 variant
            // also means semi-limited.
            if s.contains("禁止") {
                RestrictionStatus::Forbidden
            } else if s.contains('准') || (s.contains('半') && s.contains('限')) {
                RestrictionStatus::SemiLimited
            } else if s.contains("限制") {
                RestrictionStatus::Limited
            } else {
                RestrictionStatus::Unrestricted
            }
        }
        Some(Banlist::Ocg) => {
            if s.contains("禁止") {
                RestrictionStatus::Forbidden
            } else if s.contains('準') || s.contains('准') {
                RestrictionStatus::SemiLimited
            } else if s.contains("制限") {
                RestrictionStatus::Limited
            } else {
                RestrictionStatus::Unrestricted
            }
        }
        Some(Banlist::Tcg) | Some(Banlist::Ae) => {
            if lower.contains("forbid") {
                RestrictionStatus::Forbidden
            } else if lower.contains("semi") {
                RestrictionStatus::SemiLimited
            } else if lower.contains("limit") {
                RestrictionStatus::Limited
            } else {
                RestrictionStatus::Unrestricted
            }
        }
        None => {
            if lower.contains("forbid") || s.contains("禁止") {
                RestrictionStatus::Forbidden
            } else if lower.contains("semi") || s.contains('半') {
                RestrictionStatus::SemiLimited
            } else if lower.contains("limit") || s.contains("限制") || s.contains("制限") {
                RestrictionStatus::Limited
            } else {
                RestrictionStatus::Unrestricted
            }
        }
    }
}

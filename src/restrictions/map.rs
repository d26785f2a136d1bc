//! Banlist lookup table with the card-key precedence chain.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::status::{normalize_status, RestrictionStatus};
use crate::cards::Card;
use crate::formats::Banlist;

/// How lookups treat near-miss names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupMode {
    /// Exact key matches, then substring containment in either direction
    /// between candidate names and table keys. The table is unordered, so
    /// with several containment hits the first one found wins: ambiguous,
    /// but it recovers cards whose catalog name differs slightly from the
    /// published list.
    #[default]
    Compat,
    /// Exact key matches only.
    Exact,
}

/// One banlist's normalized `key -> status` table.
///
/// Keys are numeric-id strings or exact card names, as published by the
/// list source. Entries that normalize to [`RestrictionStatus::Unrestricted`]
/// are kept but never terminate an exact-match lookup, so a later key in
/// the precedence chain can still hit.
#[derive(Clone, Debug, Default)]
pub struct RestrictionMap {
    entries: FxHashMap<String, RestrictionStatus>,
}

impl RestrictionMap {
    /// Create an empty table (everything unrestricted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a raw JSON object of `key -> source label`.
    ///
    /// Malformed input yields an empty table rather than an error: a
    /// broken banlist download must degrade to "no restrictions", with
    /// the universal copy cap still enforced downstream.
    #[must_use]
    pub fn from_json(source: Banlist, json: &str) -> Self {
        let raw: FxHashMap<String, String> = match serde_json::from_str(json) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!("malformed {} banlist data, using empty table: {}", source, err);
                return Self::new();
            }
        };
        let entries = raw
            .into_iter()
            .map(|(key, label)| (key, normalize_status(&label, Some(source))))
            .collect();
        Self { entries }
    }

    /// Insert a normalized entry.
    pub fn insert(&mut self, key: impl Into<String>, status: RestrictionStatus) {
        self.entries.insert(key.into(), status);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of a single key. Unrestricted entries read as misses
    /// so the caller's precedence chain keeps going.
    fn hit(&self, key: &str) -> Option<RestrictionStatus> {
        match self.entries.get(key) {
            Some(RestrictionStatus::Unrestricted) | None => None,
            Some(status) => Some(*status),
        }
    }

    /// Status of a card under this list.
    ///
    /// Key precedence: `cid` as a string, then `id`, then each name
    /// candidate (Japanese, primary, Chinese) as an exact key. In
    /// [`LookupMode::Compat`], a final pass checks substring containment
    /// in either direction between candidates and keys; the first hit is
    /// authoritative, whatever its status.
    #[must_use]
    pub fn status_for(&self, card: &Card, mode: LookupMode) -> RestrictionStatus {
        if let Some(cid) = card.cid {
            if let Some(status) = self.hit(&cid.to_string()) {
                return status;
            }
        }
        if let Some(status) = self.hit(&card.id.raw().to_string()) {
            return status;
        }

        let candidates = card.restriction_names();
        for cand in &candidates {
            if let Some(status) = self.hit(cand) {
                return status;
            }
        }

        if mode == LookupMode::Compat {
            for (key, status) in &self.entries {
                for cand in &candidates {
                    if key.contains(*cand) || cand.contains(key.as_str()) {
                        tracing::debug!(
                            "substring fallback hit for {}: key {:?} -> {:?}",
                            card.id,
                            key,
                            status
                        );
                        return *status;
                    }
                }
            }
        }

        RestrictionStatus::Unrestricted
    }
}

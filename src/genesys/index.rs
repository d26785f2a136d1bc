//! GENESYS score index: construction and per-card resolution.
//!
//! The score table is published keyed by English card name; catalogs key
//! cards by numeric id. The index joins the two through a name→id
//! resolution table, exact name first, then normalized name, and records
//! the result under both `id` and `cid`. A normalized-name table remains
//! as the secondary lookup path for cards the join missed.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::deck::Deck;

/// Normalize a card name for matching: lowercase, HTML ampersand entity
/// to "and", non-alphanumerics to spaces, whitespace collapsed, trimmed.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace("&amp;", "and");
    let mut spaced = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            spaced.push(ch);
        } else {
            spaced.push(' ');
        }
    }
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One entry of the name→id resolution table.
#[derive(Debug, Deserialize)]
struct NameIdEntry {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    cid: Option<u32>,
    /// Alternate name carried by the resolution table itself.
    #[serde(default)]
    name: Option<String>,
}

/// Point lookup for the GENESYS format.
#[derive(Clone, Debug, Default)]
pub struct GenesysIndex {
    /// id-string (both `id` and `cid`) → points, built by the join.
    by_id: FxHashMap<String, i64>,
    /// normalized name → points, the secondary path.
    by_name: FxHashMap<String, i64>,
}

impl GenesysIndex {
    /// Empty index: every card scores 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the raw score table and name→id table, both JSON.
    ///
    /// Either input failing to parse degrades to an empty table for that
    /// side: scores default to 0, never an error.
    #[must_use]
    pub fn build(scores_json: &str, name_ids_json: &str) -> Self {
        let scores: FxHashMap<String, i64> = match serde_json::from_str(scores_json) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!("malformed GENESYS score data, using empty table: {}", err);
                FxHashMap::default()
            }
        };
        let name_ids: FxHashMap<String, NameIdEntry> = match serde_json::from_str(name_ids_json) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!("malformed name-id data, skipping id join: {}", err);
                FxHashMap::default()
            }
        };

        let mut by_name = FxHashMap::default();
        for (name, points) in &scores {
            let key = normalize_name(name);
            if !key.is_empty() {
                by_name.insert(key, *points);
            }
        }

        let mut by_id = FxHashMap::default();
        for (src_name, entry) in &name_ids {
            let mut candidates: SmallVec<[&str; 2]> = SmallVec::new();
            candidates.push(src_name.as_str());
            if let Some(alt) = entry.name.as_deref() {
                candidates.push(alt);
            }

            let mut points = None;
            for cand in candidates {
                if let Some(p) = scores.get(cand) {
                    points = Some(*p);
                    break;
                }
                if let Some(p) = by_name.get(&normalize_name(cand)) {
                    points = Some(*p);
                    break;
                }
            }

            if let Some(p) = points {
                if let Some(id) = entry.id {
                    by_id.insert(id.to_string(), p);
                }
                if let Some(cid) = entry.cid {
                    by_id.insert(cid.to_string(), p);
                }
            }
        }

        Self { by_id, by_name }
    }

    /// Number of id-keyed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether both tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_name.is_empty()
    }

    /// Point value of a card.
    ///
    /// Resolution order: id-keyed table by `cid` then `id`; then the
    /// normalized-name table against the Chinese, primary, and Japanese
    /// names in that order; else 0.
    #[must_use]
    pub fn score_for(&self, card: &Card) -> i64 {
        if let Some(cid) = card.cid {
            if let Some(points) = self.by_id.get(&cid.to_string()) {
                return *points;
            }
        }
        if let Some(points) = self.by_id.get(&card.id.raw().to_string()) {
            return *points;
        }
        for cand in card.score_names() {
            let key = normalize_name(cand);
            if key.is_empty() {
                continue;
            }
            if let Some(points) = self.by_name.get(&key) {
                return *points;
            }
        }
        0
    }

    /// Point total over main, extra, and side.
    #[must_use]
    pub fn deck_total(&self, deck: &Deck) -> i64 {
        deck.iter_all().map(|card| self.score_for(card)).sum()
    }
}

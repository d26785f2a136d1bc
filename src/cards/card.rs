//! Card records as supplied by the catalog.
//!
//! A `Card` is immutable as seen by the core: the catalog creates it, decks
//! hold clones of it. Optional fields are resolved through documented
//! fallback chains rather than ad hoc lookups; see
//! [`restriction_names`](Card::restriction_names),
//! [`score_names`](Card::score_names), and the
//! [`level`](crate::cards::level) module.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique numeric identifier for a card (the printed passcode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card as the core sees it.
///
/// Only `id` is guaranteed. `cid` is an alternate catalog identifier,
/// preferred over `id` for restriction and score lookups when present,
/// but copy counting always uses `id` alone.
///
/// ## Example
///
/// ```
/// use ygo_deck_core::cards::{Card, CardId};
///
/// let card = Card::new(CardId::new(46986414))
///     .with_cn_name("黑魔术师")
///     .with_type_tags("通常怪兽")
///     .with_level(7);
///
/// assert_eq!(card.display_name(), "黑魔术师");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Primary numeric key.
    pub id: CardId,

    /// Alternate catalog id, when the catalog carries one.
    #[serde(default)]
    pub cid: Option<u32>,

    /// English (or catalog-primary) name.
    #[serde(default)]
    pub name: Option<String>,

    /// Simplified-Chinese name.
    #[serde(default)]
    pub cn_name: Option<String>,

    /// Japanese name.
    #[serde(default)]
    pub jp_name: Option<String>,

    /// Free-text type line, e.g. "效果怪兽" or "速攻魔法".
    /// Category derivation is keyword containment over this string.
    #[serde(default)]
    pub type_tags: String,

    /// Explicit level / rank / link-marker count when the catalog
    /// provides one.
    #[serde(default)]
    pub level: Option<i64>,

    /// Card text; fallback source for level and link-marker extraction.
    #[serde(default)]
    pub desc: Option<String>,
}

impl Card {
    /// Create a card with only its primary key set.
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            cid: None,
            name: None,
            cn_name: None,
            jp_name: None,
            type_tags: String::new(),
            level: None,
            desc: None,
        }
    }

    /// Set the alternate catalog id (builder pattern).
    #[must_use]
    pub fn with_cid(mut self, cid: u32) -> Self {
        self.cid = Some(cid);
        self
    }

    /// Set the catalog-primary name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the Simplified-Chinese name.
    #[must_use]
    pub fn with_cn_name(mut self, name: impl Into<String>) -> Self {
        self.cn_name = Some(name.into());
        self
    }

    /// Set the Japanese name.
    #[must_use]
    pub fn with_jp_name(mut self, name: impl Into<String>) -> Self {
        self.jp_name = Some(name.into());
        self
    }

    /// Set the type line.
    #[must_use]
    pub fn with_type_tags(mut self, tags: impl Into<String>) -> Self {
        self.type_tags = tags.into();
        self
    }

    /// Set the explicit level / rank / link value.
    #[must_use]
    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the card text.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Name candidates for restriction-table lookups, in precedence
    /// order: Japanese, catalog-primary, Simplified-Chinese.
    #[must_use]
    pub fn restriction_names(&self) -> SmallVec<[&str; 3]> {
        let mut names = SmallVec::new();
        if let Some(n) = self.jp_name.as_deref() {
            names.push(n);
        }
        if let Some(n) = self.name.as_deref() {
            names.push(n);
        }
        if let Some(n) = self.cn_name.as_deref() {
            names.push(n);
        }
        names
    }

    /// Name candidates for score-table lookups, in precedence order:
    /// Simplified-Chinese, catalog-primary, Japanese.
    #[must_use]
    pub fn score_names(&self) -> SmallVec<[&str; 3]> {
        let mut names = SmallVec::new();
        if let Some(n) = self.cn_name.as_deref() {
            names.push(n);
        }
        if let Some(n) = self.name.as_deref() {
            names.push(n);
        }
        if let Some(n) = self.jp_name.as_deref() {
            names.push(n);
        }
        names
    }

    /// Preferred display name: Chinese, then primary, then Japanese.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.cn_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.jp_name.as_deref())
            .unwrap_or("")
    }
}

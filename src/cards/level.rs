//! Level, rank, and link-marker resolution.
//!
//! Catalogs are inconsistent about where the numeric stat lives: some
//! records carry an explicit field, some only mention it in the card
//! text. Both resolvers prefer the explicit field and fall back to
//! pattern extraction from the description.

use lazy_static::lazy_static;
use regex::Regex;

use super::card::Card;

lazy_static! {
    static ref STAR_RE: Regex = Regex::new(r"[★☆]\s*(\d{1,2})").unwrap();
    static ref LEVEL_RE: Regex = Regex::new(r"等级\s*(\d{1,2})").unwrap();
    static ref RANK_RE: Regex = Regex::new(r"阶\s*(\d{1,2})").unwrap();
    static ref LINK_EN_RE: Regex = Regex::new(r"(?i)LINK[-\s]?(\d+)").unwrap();
    static ref LINK_CN_RE: Regex = Regex::new(r"连接\s*(\d{1,2})").unwrap();
}

fn capture_number(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Numeric level / rank / link value of a card.
///
/// This is the single primary stat for deck ordering: the explicit
/// `level` field covers levels, xyz ranks, and link-marker counts alike.
/// Without it, the description is scanned for `★n`/`☆n`, then `等级n`,
/// then `阶n`, first match wins. Defaults to 0.
#[must_use]
pub fn monster_level(card: &Card) -> i64 {
    if let Some(level) = card.level {
        return level;
    }
    let Some(desc) = card.desc.as_deref() else {
        return 0;
    };
    capture_number(&STAR_RE, desc)
        .or_else(|| capture_number(&LEVEL_RE, desc))
        .or_else(|| capture_number(&RANK_RE, desc))
        .unwrap_or(0)
}

/// Link-marker count of a link monster.
///
/// `None` for non-link cards and for link cards whose count cannot be
/// determined (treat as unbounded: it sorts last under an ascending
/// comparison). Extra-deck ordering does not call this: it uses
/// [`monster_level`] as the primary stat for every extra category, link
/// monsters included. The marker count remains useful on its own.
#[must_use]
pub fn link_markers(card: &Card) -> Option<i64> {
    if !card.type_tags.contains("连接") {
        return None;
    }
    if let Some(level) = card.level {
        return Some(level);
    }
    let desc = card.desc.as_deref()?;
    capture_number(&LINK_EN_RE, desc).or_else(|| capture_number(&LINK_CN_RE, desc))
}

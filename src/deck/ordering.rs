//! Canonical deck ordering.
//!
//! Main and side decks group monsters, then spells, then traps, each with
//! its own sub-rank; the extra deck groups fusion, synchro, xyz, link.
//! Both comparators are deliberately partial (spells and traps stop at
//! the sub-rank), so a stable sort preserves relative order on ties.

use std::cmp::Ordering;

use crate::cards::{
    category_of, extra_category_of, monster_kind, monster_level, spell_kind, trap_kind, Card,
    CardCategory,
};

/// Comparator for the main and side decks.
///
/// Monsters: sub-rank (normal, effect, ritual, pendulum), then level
/// descending, then id ascending as the final tie-break so duplicates
/// stay adjacent. Spells and traps: sub-rank only.
#[must_use]
pub fn compare_main_side(a: &Card, b: &Card) -> Ordering {
    let primary = category_of(a).rank().cmp(&category_of(b).rank());
    if primary != Ordering::Equal {
        return primary;
    }

    match category_of(a) {
        CardCategory::Monster => {
            let sub = monster_kind(a).rank().cmp(&monster_kind(b).rank());
            if sub != Ordering::Equal {
                return sub;
            }
            let level = monster_level(b).cmp(&monster_level(a));
            if level != Ordering::Equal {
                return level;
            }
            a.id.cmp(&b.id)
        }
        CardCategory::Spell => spell_kind(a).rank().cmp(&spell_kind(b).rank()),
        CardCategory::Trap => trap_kind(a).rank().cmp(&trap_kind(b).rank()),
        CardCategory::Other => Ordering::Equal,
    }
}

/// Comparator for the extra deck.
///
/// Category rank, then the unified numeric stat descending, then id
/// ascending. Link monsters compare by [`monster_level`] like every
/// other extra category; the marker-count resolver is not consulted
/// here.
#[must_use]
pub fn compare_extra(a: &Card, b: &Card) -> Ordering {
    let primary = extra_category_of(a).rank().cmp(&extra_category_of(b).rank());
    if primary != Ordering::Equal {
        return primary;
    }
    let level = monster_level(b).cmp(&monster_level(a));
    if level != Ordering::Equal {
        return level;
    }
    a.id.cmp(&b.id)
}

//! Category derivation from the type line.
//!
//! The type line is free text; categories are keyword containment over it.
//! Each category carries a rank used by the deck ordering comparators.
//! Rank 9 is the shared "unrecognized" bucket so unknown cards sort after
//! everything known.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::deck::DeckSection;

/// Top-level category within the main and side decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCategory {
    Monster,
    Spell,
    Trap,
    Other,
}

impl CardCategory {
    /// Primary sort key: monsters before spells before traps.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            CardCategory::Monster => 0,
            CardCategory::Spell => 1,
            CardCategory::Trap => 2,
            CardCategory::Other => 9,
        }
    }
}

/// Monster sub-category. A ritual or pendulum monster never counts as a
/// plain effect monster, even when its type line also says 效果.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterKind {
    Normal,
    Effect,
    Ritual,
    Pendulum,
    Other,
}

impl MonsterKind {
    /// Secondary sort key: normal, effect, ritual, pendulum.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            MonsterKind::Normal => 0,
            MonsterKind::Effect => 1,
            MonsterKind::Ritual => 2,
            MonsterKind::Pendulum => 3,
            MonsterKind::Other => 9,
        }
    }
}

/// Spell sub-category. A line saying 魔法 with no special keyword is a
/// normal spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellKind {
    Normal,
    Ritual,
    QuickPlay,
    Continuous,
    Field,
    Other,
}

impl SpellKind {
    /// Secondary sort key: normal, ritual, quick-play, continuous, field.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            SpellKind::Normal => 0,
            SpellKind::Ritual => 1,
            SpellKind::QuickPlay => 2,
            SpellKind::Continuous => 3,
            SpellKind::Field => 4,
            SpellKind::Other => 9,
        }
    }
}

/// Trap sub-category. 陷阱 with no special keyword is a normal trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapKind {
    Normal,
    Continuous,
    Counter,
    Other,
}

impl TrapKind {
    /// Secondary sort key: normal, continuous, counter.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            TrapKind::Normal => 0,
            TrapKind::Continuous => 1,
            TrapKind::Counter => 2,
            TrapKind::Other => 9,
        }
    }
}

/// Extra-deck category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraCategory {
    Fusion,
    Synchro,
    Xyz,
    Link,
    Other,
}

impl ExtraCategory {
    /// Primary sort key within the extra deck: fusion, synchro, xyz, link.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            ExtraCategory::Fusion => 0,
            ExtraCategory::Synchro => 1,
            ExtraCategory::Xyz => 2,
            ExtraCategory::Link => 3,
            ExtraCategory::Other => 9,
        }
    }
}

/// Top-level category of a card.
#[must_use]
pub fn category_of(card: &Card) -> CardCategory {
    let t = &card.type_tags;
    if t.contains("怪兽") {
        CardCategory::Monster
    } else if t.contains("魔法") {
        CardCategory::Spell
    } else if t.contains("陷阱") {
        CardCategory::Trap
    } else {
        CardCategory::Other
    }
}

/// Monster sub-category of a card.
#[must_use]
pub fn monster_kind(card: &Card) -> MonsterKind {
    let t = &card.type_tags;
    if t.contains("通常") {
        MonsterKind::Normal
    } else if t.contains("效果") && !(t.contains("仪式") || t.contains("灵摆")) {
        MonsterKind::Effect
    } else if t.contains("仪式") {
        MonsterKind::Ritual
    } else if t.contains("灵摆") {
        MonsterKind::Pendulum
    } else {
        MonsterKind::Other
    }
}

/// Spell sub-category of a card.
#[must_use]
pub fn spell_kind(card: &Card) -> SpellKind {
    let t = &card.type_tags;
    if t.contains("仪式") {
        SpellKind::Ritual
    } else if t.contains("速攻") {
        SpellKind::QuickPlay
    } else if t.contains("永续") {
        SpellKind::Continuous
    } else if t.contains("场地") {
        SpellKind::Field
    } else if t.contains("魔法") {
        SpellKind::Normal
    } else {
        SpellKind::Other
    }
}

/// Trap sub-category of a card.
#[must_use]
pub fn trap_kind(card: &Card) -> TrapKind {
    let t = &card.type_tags;
    if t.contains("永续") {
        TrapKind::Continuous
    } else if t.contains("反击") {
        TrapKind::Counter
    } else if t.contains("通常") || t.contains("陷阱") {
        TrapKind::Normal
    } else {
        TrapKind::Other
    }
}

/// Extra-deck category of a card.
#[must_use]
pub fn extra_category_of(card: &Card) -> ExtraCategory {
    let t = &card.type_tags;
    if t.contains("融合") {
        ExtraCategory::Fusion
    } else if t.contains("同调") {
        ExtraCategory::Synchro
    } else if t.contains("超量") {
        ExtraCategory::Xyz
    } else if t.contains("连接") {
        ExtraCategory::Link
    } else {
        ExtraCategory::Other
    }
}

/// Whether the card belongs to the extra deck.
#[must_use]
pub fn is_extra_monster(card: &Card) -> bool {
    let t = &card.type_tags;
    t.contains("融合") || t.contains("同调") || t.contains("超量") || t.contains("连接")
}

/// Deck sections a card may be added to.
///
/// Extra-deck types go to extra or side; everything else (monsters,
/// spells, traps, and cards whose category cannot be resolved) goes to
/// main or side. The admission gate does not re-derive this; callers use
/// it to decide which sections to offer.
#[must_use]
pub fn card_groups(card: &Card) -> SmallVec<[DeckSection; 2]> {
    if is_extra_monster(card) {
        SmallVec::from_slice(&[DeckSection::Extra, DeckSection::Side])
    } else {
        SmallVec::from_slice(&[DeckSection::Main, DeckSection::Side])
    }
}

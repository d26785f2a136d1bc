//! Canonical ordering tests.
//!
//! Deck sorting is a deterministic multi-key sort: category, sub-rank,
//! level descending, id ascending, with spells and traps deliberately
//! stopping at the sub-rank, relying on sort stability.

use proptest::prelude::*;

use ygo_deck_core::{Card, CardId, Deck, DeckSection};

fn card(id: u32, tags: &str, level: i64) -> Card {
    Card::new(CardId::new(id)).with_type_tags(tags).with_level(level)
}

fn main_ids(deck: &Deck) -> Vec<u32> {
    deck.cards(DeckSection::Main).map(|c| c.id.raw()).collect()
}

/// Monster sub-rank dominates level: 通常(4) before 效果(8) before 灵摆(4).
#[test]
fn test_monster_subrank_dominates_level() {
    let mut deck = Deck::new();
    deck.push(DeckSection::Main, card(3, "怪兽/灵摆", 4));
    deck.push(DeckSection::Main, card(2, "怪兽/效果", 8));
    deck.push(DeckSection::Main, card(1, "怪兽/通常", 4));

    deck.sort();
    assert_eq!(main_ids(&deck), [1, 2, 3]);
}

/// Full main-deck grouping: monsters by sub-rank and level, then spells
/// by sub-rank, then traps by sub-rank.
#[test]
fn test_main_deck_grouping() {
    let mut deck = Deck::new();
    deck.push(DeckSection::Main, card(7, "反击陷阱", 0));
    deck.push(DeckSection::Main, card(5, "场地魔法", 0));
    deck.push(DeckSection::Main, card(4, "速攻魔法", 0));
    deck.push(DeckSection::Main, card(6, "通常陷阱", 0));
    deck.push(DeckSection::Main, card(2, "效果怪兽", 4));
    deck.push(DeckSection::Main, card(1, "效果怪兽", 8));
    deck.push(DeckSection::Main, card(3, "通常魔法", 0));

    deck.sort();
    assert_eq!(main_ids(&deck), [1, 2, 3, 4, 5, 6, 7]);
}

/// Monsters with equal sub-rank and level fall back to id ascending, so
/// duplicates end up adjacent.
#[test]
fn test_monster_id_tiebreak() {
    let mut deck = Deck::new();
    deck.push(DeckSection::Main, card(30, "效果怪兽", 4));
    deck.push(DeckSection::Main, card(10, "效果怪兽", 4));
    deck.push(DeckSection::Main, card(30, "效果怪兽", 4));
    deck.push(DeckSection::Main, card(20, "效果怪兽", 4));

    deck.sort();
    assert_eq!(main_ids(&deck), [10, 20, 30, 30]);
}

/// Spells with the same sub-rank keep their relative order (stable sort,
/// no id tie-break).
#[test]
fn test_spell_ties_keep_insertion_order() {
    let mut deck = Deck::new();
    deck.push(DeckSection::Main, card(9, "速攻魔法", 0));
    deck.push(DeckSection::Main, card(3, "速攻魔法", 0));
    deck.push(DeckSection::Main, card(6, "速攻魔法", 0));

    deck.sort();
    assert_eq!(main_ids(&deck), [9, 3, 6]);
}

/// Extra deck orders fusion, synchro, xyz, link; inside a category the
/// numeric stat descends, then id ascends.
#[test]
fn test_extra_deck_order() {
    let mut deck = Deck::new();
    deck.push(DeckSection::Extra, card(6, "连接怪兽", 2));
    deck.push(DeckSection::Extra, card(5, "连接怪兽", 4));
    deck.push(DeckSection::Extra, card(4, "超量怪兽", 4));
    deck.push(DeckSection::Extra, card(3, "同调怪兽", 8));
    deck.push(DeckSection::Extra, card(2, "融合怪兽", 6));
    deck.push(DeckSection::Extra, card(1, "融合怪兽", 10));

    deck.sort();
    let ids: Vec<u32> = deck.cards(DeckSection::Extra).map(|c| c.id.raw()).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
}

/// Link monsters rank by the same unified stat as other extra types, so
/// a higher stat sorts first even between links.
#[test]
fn test_link_monsters_use_unified_stat() {
    let mut deck = Deck::new();
    deck.push(DeckSection::Extra, card(1, "连接怪兽", 2));
    deck.push(DeckSection::Extra, card(2, "连接怪兽", 3));

    deck.sort();
    let ids: Vec<u32> = deck.cards(DeckSection::Extra).map(|c| c.id.raw()).collect();
    assert_eq!(ids, [2, 1]);
}

/// Levels parsed out of the card text participate in ordering like
/// explicit ones.
#[test]
fn test_level_from_description_orders() {
    let high = Card::new(CardId::new(1))
        .with_type_tags("效果怪兽")
        .with_desc("★8/攻击力3000");
    let low = Card::new(CardId::new(2))
        .with_type_tags("效果怪兽")
        .with_desc("★4/攻击力1800");

    let mut deck = Deck::new();
    deck.push(DeckSection::Main, low);
    deck.push(DeckSection::Main, high);

    deck.sort();
    assert_eq!(main_ids(&deck), [1, 2]);
}

/// Side decks sort with the main-deck comparator.
#[test]
fn test_side_uses_main_comparator() {
    let mut deck = Deck::new();
    deck.push(DeckSection::Side, card(2, "通常陷阱", 0));
    deck.push(DeckSection::Side, card(1, "效果怪兽", 4));

    deck.sort();
    let ids: Vec<u32> = deck.cards(DeckSection::Side).map(|c| c.id.raw()).collect();
    assert_eq!(ids, [1, 2]);
}

fn arb_card() -> impl Strategy<Value = Card> {
    let tags = prop::sample::select(vec![
        "通常怪兽",
        "效果怪兽",
        "仪式/效果怪兽",
        "灵摆/效果怪兽",
        "通常魔法",
        "速攻魔法",
        "永续魔法",
        "场地魔法",
        "仪式魔法",
        "通常陷阱",
        "永续陷阱",
        "反击陷阱",
        "融合怪兽",
        "同调怪兽",
        "超量怪兽",
        "连接怪兽",
        "",
    ]);
    (1u32..200, tags, 0i64..13).prop_map(|(id, tags, level)| {
        Card::new(CardId::new(id)).with_type_tags(tags).with_level(level)
    })
}

proptest! {
    /// Sorting twice yields the same sequence as sorting once, for every
    /// section and any mix of cards.
    #[test]
    fn test_sort_is_idempotent(cards in prop::collection::vec(arb_card(), 0..60)) {
        let mut deck = Deck::new();
        for c in &cards {
            deck.push(DeckSection::Main, c.clone());
            deck.push(DeckSection::Side, c.clone());
            deck.push(DeckSection::Extra, c.clone());
        }

        deck.sort();
        let once: Vec<CardId> = deck.iter_all().map(|c| c.id).collect();
        deck.sort();
        let twice: Vec<CardId> = deck.iter_all().map(|c| c.id).collect();
        prop_assert_eq!(once, twice);
    }
}

//! The admission check.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::{Deck, DeckSection};
use crate::restrictions::RestrictionStatus;

/// Why an admission was declined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Forbidden under the active format.
    Forbidden,
    /// Limited to 1 copy and one is already in the deck.
    Limited,
    /// Semi-limited to 2 copies and both are already in the deck.
    SemiLimited,
    /// The universal cap: 3 copies of a named card, regardless of format.
    CopyLimit,
    /// The target section is at capacity.
    SectionFull(DeckSection),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Forbidden => {
                write!(f, "this card is forbidden in the current format")
            }
            RejectReason::Limited => write!(
                f,
                "this card is limited to 1 copy across main, extra, and side decks"
            ),
            RejectReason::SemiLimited => write!(
                f,
                "this card is semi-limited to 2 copies across main, extra, and side decks"
            ),
            RejectReason::CopyLimit => write!(
                f,
                "no more than 3 copies of a named card across main, extra, and side decks"
            ),
            RejectReason::SectionFull(section) => write!(
                f,
                "the {} deck cannot hold more than {} cards",
                section,
                section.capacity()
            ),
        }
    }
}

/// Outcome of an admission check.
///
/// Expected rejections are values, never errors: the deck is unchanged
/// and the reason is reportable to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Admitted,
    Rejected(RejectReason),
}

impl Verdict {
    /// Whether the card was admitted.
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Verdict::Admitted)
    }

    /// The rejection reason, if declined.
    #[must_use]
    pub const fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Admitted => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

/// Decide whether `card` may be appended to `section`.
///
/// Checks run in order and the first failure wins:
///
/// 1. Forbidden status rejects outright, before any copy exists.
/// 2. Limited / semi-limited reject at 1 / 2 existing copies.
/// 3. The universal 3-copy cap rejects regardless of format. This is
///    also the floor when status resolution failed upstream and degraded
///    to unrestricted.
/// 4. The target section must have room.
///
/// Copies are counted by exact `id` across all three sections. The
/// status comes from the restriction store under the active format.
#[must_use]
pub fn can_add(card: &Card, section: DeckSection, deck: &Deck, status: RestrictionStatus) -> Verdict {
    let same_count = deck.count_copies(card.id);

    match status {
        RestrictionStatus::Forbidden => return Verdict::Rejected(RejectReason::Forbidden),
        RestrictionStatus::Limited if same_count >= 1 => {
            return Verdict::Rejected(RejectReason::Limited);
        }
        RestrictionStatus::SemiLimited if same_count >= 2 => {
            return Verdict::Rejected(RejectReason::SemiLimited);
        }
        _ => {}
    }

    if same_count >= 3 {
        return Verdict::Rejected(RejectReason::CopyLimit);
    }

    if deck.is_full(section) {
        return Verdict::Rejected(RejectReason::SectionFull(section));
    }

    Verdict::Admitted
}

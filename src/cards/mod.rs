//! Card model: records, categories, and derived attributes.
//!
//! ## Key Types
//!
//! - `CardId`: numeric primary key (the printed passcode)
//! - `Card`: immutable catalog record with optional fields
//! - `CardCategory` / `ExtraCategory` and the sub-kind enums: sort ranks
//!   derived from the free-text type line
//!
//! ## Derived Attributes
//!
//! Every optional attribute has one resolution function with a documented
//! fallback order: `monster_level`, `link_markers`, `card_groups`, and the
//! name-candidate chains on `Card`.

pub mod card;
pub mod category;
pub mod level;

pub use card::{Card, CardId};
pub use category::{
    card_groups, category_of, extra_category_of, is_extra_monster, monster_kind, spell_kind,
    trap_kind, CardCategory, ExtraCategory, MonsterKind, SpellKind, TrapKind,
};
pub use level::{link_markers, monster_level};

//! Spell module - the cached SRD spell catalogue.

mod filter;
pub(crate) mod srd_spell;

pub use filter::SpellFilter;
pub use srd_spell::{SrdSpell, MAX_SPELL_LEVEL, MIN_SPELL_LEVEL};

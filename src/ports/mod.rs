//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CharacterRepository` - Character persistence
//! - `SpellRepository` - Local SRD spell cache
//! - `SrdSpellSource` - Upstream SRD spell API

mod character_repository;
mod spell_repository;
mod srd_spell_source;

pub use character_repository::CharacterRepository;
pub use spell_repository::SpellRepository;
pub use srd_spell_source::SrdSpellSource;

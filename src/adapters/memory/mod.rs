//! In-memory adapters for tests and throwaway dev runs.

mod in_memory_character_repository;
mod in_memory_spell_repository;

pub use in_memory_character_repository::InMemoryCharacterRepository;
pub use in_memory_spell_repository::InMemorySpellRepository;

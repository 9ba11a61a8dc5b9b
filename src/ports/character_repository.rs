//! Character repository port.
//!
//! Defines the contract for persisting and retrieving Character aggregates.
//! Implementations never apply game rules and trust their inputs to be
//! validated already.

use crate::domain::character::{Character, CharacterPatch, NewCharacter};
use crate::domain::foundation::{CharacterId, DomainError, Slug};
use async_trait::async_trait;

/// Repository port for Character aggregate persistence.
///
/// Implementations must ensure:
/// - ids and slugs are unique across live records
/// - `update` preserves `id`, `slug` and `createdAt`
/// - a missing record is reported as `None` / `false`, never as an error
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Store a new character.
    ///
    /// Assigns a fresh id, a slug derived from the name, equipment ids
    /// and `createdAt = updatedAt = now`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure, including a slug
    ///   collision that survives the configured retries
    async fn create(&self, input: NewCharacter) -> Result<Character, DomainError>;

    /// Find a character by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, DomainError>;

    /// Find a character by its share slug.
    ///
    /// Returns `None` if not found.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Character>, DomainError>;

    /// All characters. Order is not significant.
    async fn find_all(&self) -> Result<Vec<Character>, DomainError>;

    /// Merge `patch` into the stored character.
    ///
    /// Returns `None` without writing if the character does not exist.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn update(
        &self,
        id: &CharacterId,
        patch: CharacterPatch,
    ) -> Result<Option<Character>, DomainError>;

    /// Delete a character. Returns whether a record was removed.
    async fn delete(&self, id: &CharacterId) -> Result<bool, DomainError>;

    /// Remove every character (tests and maintenance only).
    async fn clear(&self) -> Result<(), DomainError>;
}

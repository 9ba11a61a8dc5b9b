//! Spell cache port.

use crate::domain::foundation::DomainError;
use crate::domain::spell::{SpellFilter, SrdSpell};
use async_trait::async_trait;

/// Local store of SRD spells keyed by `index`.
#[async_trait]
pub trait SpellRepository: Send + Sync {
    /// Insert or replace spells by index. Spells without `cached_at`
    /// are stamped with the current time.
    async fn upsert_all(&self, spells: &[SrdSpell]) -> Result<(), DomainError>;

    async fn find_all(&self) -> Result<Vec<SrdSpell>, DomainError>;

    /// Returns `None` if the index is not cached.
    async fn find_by_index(&self, index: &str) -> Result<Option<SrdSpell>, DomainError>;

    /// Spells matching every criterion of `filter`.
    async fn search(&self, filter: &SpellFilter) -> Result<Vec<SrdSpell>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    async fn clear(&self) -> Result<(), DomainError>;
}

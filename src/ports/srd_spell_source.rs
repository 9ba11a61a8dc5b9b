//! Upstream source of SRD spell data.

use crate::domain::foundation::DomainError;
use crate::domain::spell::SrdSpell;
use async_trait::async_trait;

/// Fetches the full spell list from the SRD.
#[async_trait]
pub trait SrdSpellSource: Send + Sync {
    /// Every spell that could be fetched.
    ///
    /// Individual spells that fail to load are skipped.
    ///
    /// # Errors
    ///
    /// - `UpstreamError` if the spell list itself cannot be retrieved
    async fn fetch_all(&self) -> Result<Vec<SrdSpell>, DomainError>;
}

//! RefreshSpellCacheHandler - drops the cache and refetches from the SRD.

use std::sync::Arc;

use tracing::info;

use super::fetch_and_cache;
use crate::domain::foundation::DomainError;
use crate::ports::{SpellRepository, SrdSpellSource};

#[derive(Debug, Clone, Default)]
pub struct RefreshSpellCacheCommand;

pub struct RefreshSpellCacheHandler {
    repository: Arc<dyn SpellRepository>,
    source: Arc<dyn SrdSpellSource>,
}

impl RefreshSpellCacheHandler {
    pub fn new(repository: Arc<dyn SpellRepository>, source: Arc<dyn SrdSpellSource>) -> Self {
        Self { repository, source }
    }

    /// Returns the number of spells now cached.
    ///
    /// The cache is cleared before fetching, so an upstream failure leaves
    /// it empty and the next listing retries the population.
    pub async fn handle(&self, _cmd: RefreshSpellCacheCommand) -> Result<usize, DomainError> {
        info!("Refreshing spell cache");
        self.repository.clear().await?;
        fetch_and_cache(self.source.as_ref(), self.repository.as_ref()).await
    }
}

//! ListSpellsHandler - filtered spell listing, populating the cache on first use.

use std::sync::Arc;

use tracing::info;

use super::fetch_and_cache;
use crate::domain::foundation::DomainError;
use crate::domain::spell::{SpellFilter, SrdSpell};
use crate::ports::{SpellRepository, SrdSpellSource};

#[derive(Debug, Clone, Default)]
pub struct ListSpellsQuery {
    pub filter: SpellFilter,
}

pub struct ListSpellsHandler {
    repository: Arc<dyn SpellRepository>,
    source: Arc<dyn SrdSpellSource>,
}

impl ListSpellsHandler {
    pub fn new(repository: Arc<dyn SpellRepository>, source: Arc<dyn SrdSpellSource>) -> Self {
        Self { repository, source }
    }

    /// # Errors
    ///
    /// - `UpstreamError` if the cache is empty and the SRD list cannot be fetched
    pub async fn handle(&self, query: ListSpellsQuery) -> Result<Vec<SrdSpell>, DomainError> {
        if self.repository.count().await? == 0 {
            info!("Spell cache empty, populating");
            fetch_and_cache(self.source.as_ref(), self.repository.as_ref()).await?;
        }

        if query.filter.is_empty() {
            self.repository.find_all().await
        } else {
            self.repository.search(&query.filter).await
        }
    }
}

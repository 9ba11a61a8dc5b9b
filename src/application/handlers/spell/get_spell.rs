//! GetSpellHandler - single cached spell by SRD index.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::spell::SrdSpell;
use crate::ports::SpellRepository;

#[derive(Debug, Clone)]
pub struct GetSpellQuery {
    pub index: String,
}

pub struct GetSpellHandler {
    repository: Arc<dyn SpellRepository>,
}

impl GetSpellHandler {
    pub fn new(repository: Arc<dyn SpellRepository>) -> Self {
        Self { repository }
    }

    /// Reads the cache only; an uncached index is `None`.
    pub async fn handle(&self, query: GetSpellQuery) -> Result<Option<SrdSpell>, DomainError> {
        info!(index = %query.index, "Getting spell by index");
        self.repository.find_by_index(&query.index).await
    }
}

//! Spell handlers - read-through access to the SRD spell cache.

mod get_spell;
mod list_spells;
mod refresh_spell_cache;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_spell::{GetSpellHandler, GetSpellQuery};
pub use list_spells::{ListSpellsHandler, ListSpellsQuery};
pub use refresh_spell_cache::{RefreshSpellCacheCommand, RefreshSpellCacheHandler};

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::ports::{SpellRepository, SrdSpellSource};

/// Pulls every spell from the source and caches what came back.
///
/// Returns the number of spells cached.
pub(crate) async fn fetch_and_cache(
    source: &dyn SrdSpellSource,
    repository: &dyn SpellRepository,
) -> Result<usize, DomainError> {
    info!("Fetching spells from SRD");
    let spells = source.fetch_all().await?;
    if !spells.is_empty() {
        repository.upsert_all(&spells).await?;
    }
    info!(cached = spells.len(), "Spells cached");
    Ok(spells.len())
}

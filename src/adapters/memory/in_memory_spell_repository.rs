//! In-Memory Spell Repository
//!
//! Spell cache held in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::spell::{SpellFilter, SrdSpell};
use crate::ports::SpellRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemorySpellRepository {
    spells: Arc<RwLock<BTreeMap<String, SrdSpell>>>,
}

impl InMemorySpellRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted(mut spells: Vec<SrdSpell>) -> Vec<SrdSpell> {
    spells.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
    spells
}

#[async_trait]
impl SpellRepository for InMemorySpellRepository {
    async fn upsert_all(&self, spells: &[SrdSpell]) -> Result<(), DomainError> {
        let now = Timestamp::now();
        let mut stored = self.spells.write().await;
        for spell in spells {
            let mut spell = spell.clone();
            spell.cached_at.get_or_insert(now);
            stored.insert(spell.index.clone(), spell);
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SrdSpell>, DomainError> {
        Ok(sorted(self.spells.read().await.values().cloned().collect()))
    }

    async fn find_by_index(&self, index: &str) -> Result<Option<SrdSpell>, DomainError> {
        Ok(self.spells.read().await.get(index).cloned())
    }

    async fn search(&self, filter: &SpellFilter) -> Result<Vec<SrdSpell>, DomainError> {
        let spells = self.spells.read().await;
        Ok(sorted(
            spells
                .values()
                .filter(|spell| filter.matches(spell))
                .cloned()
                .collect(),
        ))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.spells.read().await.len() as u64)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.spells.write().await.clear();
        Ok(())
    }
}

//! Spell source doubles shared by the spell handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::spell::SrdSpell;
use crate::ports::SrdSpellSource;

pub(crate) fn spell(index: &str, name: &str, level: i32, classes: &[&str]) -> SrdSpell {
    SrdSpell {
        index: index.to_string(),
        name: name.to_string(),
        level,
        school: "Evocation".to_string(),
        casting_time: "1 action".to_string(),
        range: "60 feet".to_string(),
        duration: "Instantaneous".to_string(),
        description: format!("{} description", name),
        classes: classes.iter().map(|c| c.to_string()).collect(),
        cached_at: None,
    }
}

/// Serves a fixed spell list and counts fetches.
pub(crate) struct StubSpellSource {
    spells: Vec<SrdSpell>,
    fail: bool,
    fetches: AtomicUsize,
}

impl StubSpellSource {
    pub(crate) fn new(spells: Vec<SrdSpell>) -> Self {
        Self {
            spells,
            fail: false,
            fetches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SrdSpellSource for StubSpellSource {
    async fn fetch_all(&self) -> Result<Vec<SrdSpell>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::UpstreamError,
                "SRD API list request failed: 503 Service Unavailable",
            ));
        }
        Ok(self.spells.clone())
    }
}

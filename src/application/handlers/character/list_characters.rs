//! ListCharactersHandler - Query handler for all characters.

use std::sync::Arc;

use tracing::info;

use crate::domain::character::{Character, CharacterError};
use crate::ports::CharacterRepository;

#[derive(Debug, Clone, Default)]
pub struct ListCharactersQuery;

pub struct ListCharactersHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl ListCharactersHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListCharactersQuery) -> Result<Vec<Character>, CharacterError> {
        info!("Listing all characters");
        let characters = self.repository.find_all().await?;
        info!(count = characters.len(), "Characters listed");
        Ok(characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::character::test_support::{new_wizard, seeded};

    #[tokio::test]
    async fn lists_every_character() {
        let (repo, _) = seeded().await;
        repo.create(new_wizard()).await.unwrap();

        let all = ListCharactersHandler::new(repo)
            .handle(ListCharactersQuery)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }
}

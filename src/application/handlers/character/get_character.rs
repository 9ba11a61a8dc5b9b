//! Query handlers for single characters, by id or by share slug.

use std::sync::Arc;

use tracing::info;

use crate::domain::character::{Character, CharacterError};
use crate::domain::foundation::{CharacterId, Slug};
use crate::ports::CharacterRepository;

#[derive(Debug, Clone)]
pub struct GetCharacterQuery {
    pub id: CharacterId,
}

pub struct GetCharacterHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl GetCharacterHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCharacterQuery) -> Result<Option<Character>, CharacterError> {
        info!(id = %query.id, "Getting character");
        let character = self.repository.find_by_id(&query.id).await?;
        if character.is_none() {
            info!(id = %query.id, "Character not found");
        }
        Ok(character)
    }
}

#[derive(Debug, Clone)]
pub struct GetCharacterBySlugQuery {
    pub slug: Slug,
}

/// Read-only lookup used by shared character links.
pub struct GetCharacterBySlugHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl GetCharacterBySlugHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetCharacterBySlugQuery,
    ) -> Result<Option<Character>, CharacterError> {
        info!(slug = %query.slug, "Getting character by slug");
        let character = self.repository.find_by_slug(&query.slug).await?;
        if character.is_none() {
            info!(slug = %query.slug, "Character not found by slug");
        }
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::character::test_support::seeded;

    #[tokio::test]
    async fn finds_by_id_and_slug() {
        let (repo, character) = seeded().await;

        let by_id = GetCharacterHandler::new(repo.clone())
            .handle(GetCharacterQuery { id: character.id })
            .await
            .unwrap();
        assert_eq!(by_id, Some(character.clone()));

        let by_slug = GetCharacterBySlugHandler::new(repo)
            .handle(GetCharacterBySlugQuery {
                slug: character.slug.clone().unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(by_slug, Some(character));
    }

    #[tokio::test]
    async fn unknown_keys_are_none() {
        let (repo, _) = seeded().await;

        let by_id = GetCharacterHandler::new(repo.clone())
            .handle(GetCharacterQuery { id: CharacterId::new() })
            .await
            .unwrap();
        assert!(by_id.is_none());

        let by_slug = GetCharacterBySlugHandler::new(repo)
            .handle(GetCharacterBySlugQuery {
                slug: Slug::new("nobody-0000").unwrap(),
            })
            .await
            .unwrap();
        assert!(by_slug.is_none());
    }
}

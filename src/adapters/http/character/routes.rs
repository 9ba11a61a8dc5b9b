//! HTTP routes for character endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_equipment, create_character, deal_damage, delete_character, get_character,
    get_character_by_slug, heal_character, list_characters, long_rest, remove_equipment,
    restore_spell_slot, set_ac_override, toggle_saving_throw, toggle_skill, update_character,
    use_spell_slot, CharacterHandlers,
};

/// Creates the character router; mount it at `/api/characters`.
pub fn character_routes(handlers: CharacterHandlers) -> Router {
    Router::new()
        .route("/", get(list_characters).post(create_character))
        .route("/slug/:slug", get(get_character_by_slug))
        .route(
            "/:id",
            get(get_character).put(update_character).delete(delete_character),
        )
        .route("/:id/damage", post(deal_damage))
        .route("/:id/heal", post(heal_character))
        .route("/:id/skills/:name/toggle", post(toggle_skill))
        .route("/:id/saving-throws/:ability/toggle", post(toggle_saving_throw))
        .route("/:id/equipment", post(add_equipment))
        .route("/:id/equipment/:item_id", delete(remove_equipment))
        .route("/:id/spells/:level/use", post(use_spell_slot))
        .route("/:id/spells/:level/restore", post(restore_spell_slot))
        .route("/:id/long-rest", post(long_rest))
        .route("/:id/ac", put(set_ac_override))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::adapters::memory::InMemoryCharacterRepository;
    use crate::application::handlers::character::test_support::new_wizard;
    use crate::domain::character::Character;
    use crate::ports::CharacterRepository;

    async fn app() -> (Router, Character) {
        let repo = Arc::new(InMemoryCharacterRepository::new());
        let character = repo.create(new_wizard()).await.unwrap();
        let router = Router::new().nest("/api/characters", character_routes(CharacterHandlers::new(repo)));
        (router, character)
    }

    async fn send(app: Router, method: &str, uri: String, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn create_returns_201_with_derived_sheet() {
        let (app, _) = app().await;
        let body = json!({
            "name": "Lia",
            "race": "Halfling",
            "class": "Rogue",
            "level": 3,
            "abilityScores": {"STR": 8, "DEX": 16, "CON": 12, "INT": 13, "WIS": 10, "CHA": 14},
            "hp": {"current": 20, "max": 20, "temp": 0}
        });

        let (status, json) = send(app, "POST", "/api/characters".to_string(), Some(body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(json["slug"].as_str().unwrap().starts_with("lia-"));
        assert_eq!(json["derived"]["armorClass"], 13);
        assert_eq!(json["armorClass"]["base"], 10);
    }

    #[tokio::test]
    async fn invalid_create_returns_400_listing_fields() {
        let (app, _) = app().await;
        let body = json!({
            "name": "",
            "race": "Elf",
            "class": "Wizard",
            "level": 0,
            "abilityScores": {"STR": 10, "DEX": 10, "CON": 10, "INT": 10, "WIS": 10, "CHA": 10},
            "hp": {"current": 5, "max": 5, "temp": 0}
        });

        let (status, json) = send(app, "POST", "/api/characters".to_string(), Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_FAILED");
        let fields: Vec<&str> = json["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"level"));
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let (app, character) = app().await;
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/characters/{}/damage", character.id))
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_and_unknown_ids_are_404() {
        let (app, _) = app().await;
        let (status, json) = send(app.clone(), "GET", "/api/characters/not-a-uuid".to_string(), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "CHARACTER_NOT_FOUND");

        let unknown = crate::domain::foundation::CharacterId::new();
        let (status, _) = send(app, "DELETE", format!("/api/characters/{}", unknown), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn damage_then_heal() {
        let (app, character) = app().await;
        let (status, json) = send(
            app.clone(),
            "POST",
            format!("/api/characters/{}/damage", character.id),
            Some(json!({"amount": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["hp"]["current"], 22);

        let (_, json) = send(
            app,
            "POST",
            format!("/api/characters/{}/heal", character.id),
            Some(json!({"amount": 100})),
        )
        .await;
        assert_eq!(json["hp"]["current"], 32);
    }

    #[tokio::test]
    async fn exhausted_slot_is_400_with_rule_code() {
        let (app, character) = app().await;
        let (status, json) = send(
            app,
            "POST",
            format!("/api/characters/{}/spells/3/use", character.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "NO_SPELL_SLOTS_AVAILABLE");
    }

    #[tokio::test]
    async fn slug_share_view_and_delete() {
        let (app, character) = app().await;
        let slug = character.slug.clone().unwrap();

        let (status, json) = send(app.clone(), "GET", format!("/api/characters/slug/{}", slug), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], character.id.to_string());

        let (status, _) = send(app.clone(), "DELETE", format!("/api/characters/{}", character.id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(app, "GET", format!("/api/characters/{}", character.id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn saving_throw_toggle_rejects_unknown_ability() {
        let (app, character) = app().await;
        let (status, _) = send(
            app.clone(),
            "POST",
            format!("/api/characters/{}/saving-throws/luck/toggle", character.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = send(
            app,
            "POST",
            format!("/api/characters/{}/saving-throws/dex/toggle", character.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["derived"]["savingThrows"]["DEX"]["proficient"], true);
    }

    #[tokio::test]
    async fn equipment_add_and_remove() {
        let (app, character) = app().await;
        let (status, json) = send(
            app.clone(),
            "POST",
            format!("/api/characters/{}/equipment", character.id),
            Some(json!({"name": "Rope", "quantity": 2, "weight": 5.0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["equipment"][0]["equipped"], false);
        assert_eq!(json["derived"]["totalWeight"], 10.0);
        let item_id = json["equipment"][0]["id"].as_str().unwrap().to_string();

        let (status, json) = send(
            app,
            "DELETE",
            format!("/api/characters/{}/equipment/{}", character.id, item_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["equipment"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn ac_override_set_and_clear() {
        let (app, character) = app().await;
        let (_, json) = send(
            app.clone(),
            "PUT",
            format!("/api/characters/{}/ac", character.id),
            Some(json!({"override": 18})),
        )
        .await;
        assert_eq!(json["armorClass"]["override"], 18);
        assert_eq!(json["derived"]["armorClass"], 18);

        let (_, json) = send(
            app,
            "PUT",
            format!("/api/characters/{}/ac", character.id),
            Some(json!({"override": null})),
        )
        .await;
        assert_eq!(json["armorClass"]["override"], Value::Null);
        assert_eq!(json["derived"]["armorClass"], 12);
    }
}

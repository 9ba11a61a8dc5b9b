//! HTTP handlers for character endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    bad_request, character_not_found, equipment_item_not_found, handle_character_error,
    json_rejection,
};
use crate::application::handlers::character::{
    AddEquipmentCommand, AddEquipmentHandler, CreateCharacterCommand, CreateCharacterHandler,
    DealDamageCommand, DealDamageHandler, DeleteCharacterCommand, DeleteCharacterHandler,
    GetCharacterBySlugHandler, GetCharacterBySlugQuery, GetCharacterHandler, GetCharacterQuery,
    HealCharacterCommand, HealCharacterHandler, ListCharactersHandler, ListCharactersQuery,
    LongRestCommand, LongRestHandler, RemoveEquipmentCommand, RemoveEquipmentHandler,
    RestoreSpellSlotCommand, RestoreSpellSlotHandler, SetAcOverrideCommand, SetAcOverrideHandler,
    ToggleSavingThrowCommand, ToggleSavingThrowHandler, ToggleSkillCommand, ToggleSkillHandler,
    UpdateCharacterCommand, UpdateCharacterHandler, UseSpellSlotCommand, UseSpellSlotHandler,
};
use crate::domain::character::{
    AbilityKey, Character, CharacterError, CharacterPatch, NewCharacter, NewEquipmentItem,
};
use crate::domain::foundation::{CharacterId, EquipmentItemId, Slug};
use crate::ports::CharacterRepository;

use super::dto::{AcOverrideRequest, AmountRequest, CharacterResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CharacterHandlers {
    create_handler: Arc<CreateCharacterHandler>,
    update_handler: Arc<UpdateCharacterHandler>,
    delete_handler: Arc<DeleteCharacterHandler>,
    get_handler: Arc<GetCharacterHandler>,
    get_by_slug_handler: Arc<GetCharacterBySlugHandler>,
    list_handler: Arc<ListCharactersHandler>,
    damage_handler: Arc<DealDamageHandler>,
    heal_handler: Arc<HealCharacterHandler>,
    toggle_skill_handler: Arc<ToggleSkillHandler>,
    toggle_saving_throw_handler: Arc<ToggleSavingThrowHandler>,
    add_equipment_handler: Arc<AddEquipmentHandler>,
    remove_equipment_handler: Arc<RemoveEquipmentHandler>,
    use_slot_handler: Arc<UseSpellSlotHandler>,
    restore_slot_handler: Arc<RestoreSpellSlotHandler>,
    long_rest_handler: Arc<LongRestHandler>,
    ac_override_handler: Arc<SetAcOverrideHandler>,
}

impl CharacterHandlers {
    /// Builds every character handler over one repository.
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateCharacterHandler::new(repository.clone())),
            update_handler: Arc::new(UpdateCharacterHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteCharacterHandler::new(repository.clone())),
            get_handler: Arc::new(GetCharacterHandler::new(repository.clone())),
            get_by_slug_handler: Arc::new(GetCharacterBySlugHandler::new(repository.clone())),
            list_handler: Arc::new(ListCharactersHandler::new(repository.clone())),
            damage_handler: Arc::new(DealDamageHandler::new(repository.clone())),
            heal_handler: Arc::new(HealCharacterHandler::new(repository.clone())),
            toggle_skill_handler: Arc::new(ToggleSkillHandler::new(repository.clone())),
            toggle_saving_throw_handler: Arc::new(ToggleSavingThrowHandler::new(
                repository.clone(),
            )),
            add_equipment_handler: Arc::new(AddEquipmentHandler::new(repository.clone())),
            remove_equipment_handler: Arc::new(RemoveEquipmentHandler::new(repository.clone())),
            use_slot_handler: Arc::new(UseSpellSlotHandler::new(repository.clone())),
            restore_slot_handler: Arc::new(RestoreSpellSlotHandler::new(repository.clone())),
            long_rest_handler: Arc::new(LongRestHandler::new(repository.clone())),
            ac_override_handler: Arc::new(SetAcOverrideHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// CRUD
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/characters - List all characters
pub async fn list_characters(State(handlers): State<CharacterHandlers>) -> Response {
    match handlers.list_handler.handle(ListCharactersQuery).await {
        Ok(characters) => {
            let response: Vec<CharacterResponse> =
                characters.into_iter().map(CharacterResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_character_error(e),
    }
}

/// POST /api/characters - Create a character
pub async fn create_character(
    State(handlers): State<CharacterHandlers>,
    body: Result<Json<NewCharacter>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    match handlers
        .create_handler
        .handle(CreateCharacterCommand { input })
        .await
    {
        Ok(character) => {
            (StatusCode::CREATED, Json(CharacterResponse::from(character))).into_response()
        }
        Err(e) => handle_character_error(e),
    }
}

/// GET /api/characters/:id - Get one character
pub async fn get_character(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    respond(&raw_id, handlers.get_handler.handle(GetCharacterQuery { id }).await)
}

/// GET /api/characters/slug/:slug - Read-only share view
pub async fn get_character_by_slug(
    State(handlers): State<CharacterHandlers>,
    Path(raw_slug): Path<String>,
) -> Response {
    let Ok(slug) = Slug::new(raw_slug.clone()) else {
        return character_not_found(&raw_slug);
    };
    respond(
        &raw_slug,
        handlers
            .get_by_slug_handler
            .handle(GetCharacterBySlugQuery { slug })
            .await,
    )
}

/// PUT /api/characters/:id - Partial update
pub async fn update_character(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
    body: Result<Json<CharacterPatch>, JsonRejection>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Json(patch) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    respond(
        &raw_id,
        handlers
            .update_handler
            .handle(UpdateCharacterCommand { id, patch })
            .await,
    )
}

/// DELETE /api/characters/:id - Delete a character
pub async fn delete_character(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    match handlers
        .delete_handler
        .handle(DeleteCharacterCommand { id })
        .await
    {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => character_not_found(&raw_id),
        Err(e) => handle_character_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Actions
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/characters/:id/damage
pub async fn deal_damage(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    respond(
        &raw_id,
        handlers
            .damage_handler
            .handle(DealDamageCommand { id, amount: req.amount })
            .await,
    )
}

/// POST /api/characters/:id/heal
pub async fn heal_character(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    respond(
        &raw_id,
        handlers
            .heal_handler
            .handle(HealCharacterCommand { id, amount: req.amount })
            .await,
    )
}

/// POST /api/characters/:id/skills/:name/toggle
pub async fn toggle_skill(
    State(handlers): State<CharacterHandlers>,
    Path((raw_id, skill_name)): Path<(String, String)>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    respond(
        &raw_id,
        handlers
            .toggle_skill_handler
            .handle(ToggleSkillCommand { id, skill_name })
            .await,
    )
}

/// POST /api/characters/:id/saving-throws/:ability/toggle
pub async fn toggle_saving_throw(
    State(handlers): State<CharacterHandlers>,
    Path((raw_id, raw_ability)): Path<(String, String)>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let ability = match raw_ability.parse::<AbilityKey>() {
        Ok(ability) => ability,
        Err(e) => return handle_character_error(CharacterError::Validation(e.into())),
    };
    respond(
        &raw_id,
        handlers
            .toggle_saving_throw_handler
            .handle(ToggleSavingThrowCommand { id, ability })
            .await,
    )
}

/// POST /api/characters/:id/equipment
pub async fn add_equipment(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
    body: Result<Json<NewEquipmentItem>, JsonRejection>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Json(item) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    respond(
        &raw_id,
        handlers
            .add_equipment_handler
            .handle(AddEquipmentCommand { id, item })
            .await,
    )
}

/// DELETE /api/characters/:id/equipment/:item_id
pub async fn remove_equipment(
    State(handlers): State<CharacterHandlers>,
    Path((raw_id, raw_item_id)): Path<(String, String)>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Ok(item_id) = raw_item_id.parse::<EquipmentItemId>() else {
        return equipment_item_not_found(&raw_item_id);
    };
    respond(
        &raw_id,
        handlers
            .remove_equipment_handler
            .handle(RemoveEquipmentCommand { id, item_id })
            .await,
    )
}

/// POST /api/characters/:id/spells/:level/use
pub async fn use_spell_slot(
    State(handlers): State<CharacterHandlers>,
    Path((raw_id, raw_level)): Path<(String, String)>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Some(level) = parse_level(&raw_level) else {
        return bad_request(format!("Invalid spell slot level: {}", raw_level));
    };
    respond(
        &raw_id,
        handlers
            .use_slot_handler
            .handle(UseSpellSlotCommand { id, level })
            .await,
    )
}

/// POST /api/characters/:id/spells/:level/restore
pub async fn restore_spell_slot(
    State(handlers): State<CharacterHandlers>,
    Path((raw_id, raw_level)): Path<(String, String)>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Some(level) = parse_level(&raw_level) else {
        return bad_request(format!("Invalid spell slot level: {}", raw_level));
    };
    respond(
        &raw_id,
        handlers
            .restore_slot_handler
            .handle(RestoreSpellSlotCommand { id, level })
            .await,
    )
}

/// POST /api/characters/:id/long-rest
pub async fn long_rest(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    respond(&raw_id, handlers.long_rest_handler.handle(LongRestCommand { id }).await)
}

/// PUT /api/characters/:id/ac
pub async fn set_ac_override(
    State(handlers): State<CharacterHandlers>,
    Path(raw_id): Path<String>,
    body: Result<Json<AcOverrideRequest>, JsonRejection>,
) -> Response {
    let Some(id) = parse_character_id(&raw_id) else {
        return character_not_found(&raw_id);
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    respond(
        &raw_id,
        handlers
            .ac_override_handler
            .handle(SetAcOverrideCommand {
                id,
                override_value: req.override_value,
            })
            .await,
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

/// A malformed id names a character that cannot exist.
fn parse_character_id(raw: &str) -> Option<CharacterId> {
    raw.parse().ok()
}

fn parse_level(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn respond(raw_id: &str, result: Result<Option<Character>, CharacterError>) -> Response {
    match result {
        Ok(Some(character)) => {
            (StatusCode::OK, Json(CharacterResponse::from(character))).into_response()
        }
        Ok(None) => character_not_found(raw_id),
        Err(e) => handle_character_error(e),
    }
}

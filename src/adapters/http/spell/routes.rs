//! HTTP routes for spell endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_spell, list_spells, refresh_spells, SpellHandlers};

/// Creates the spell router; mount it at `/api/spells`.
pub fn spell_routes(handlers: SpellHandlers) -> Router {
    Router::new()
        .route("/", get(list_spells))
        .route("/refresh", post(refresh_spells))
        .route("/:index", get(get_spell))
        .with_state(handlers)
}

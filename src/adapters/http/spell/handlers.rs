//! HTTP handlers for spell endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, handle_domain_error, ErrorResponse};
use crate::application::handlers::spell::{
    GetSpellHandler, GetSpellQuery, ListSpellsHandler, ListSpellsQuery, RefreshSpellCacheCommand,
    RefreshSpellCacheHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::ports::{SpellRepository, SrdSpellSource};

use super::dto::{RefreshResponse, SpellListParams};

#[derive(Clone)]
pub struct SpellHandlers {
    list_handler: Arc<ListSpellsHandler>,
    get_handler: Arc<GetSpellHandler>,
    refresh_handler: Arc<RefreshSpellCacheHandler>,
}

impl SpellHandlers {
    pub fn new(repository: Arc<dyn SpellRepository>, source: Arc<dyn SrdSpellSource>) -> Self {
        Self {
            list_handler: Arc::new(ListSpellsHandler::new(repository.clone(), source.clone())),
            get_handler: Arc::new(GetSpellHandler::new(repository.clone())),
            refresh_handler: Arc::new(RefreshSpellCacheHandler::new(repository, source)),
        }
    }
}

/// GET /api/spells?name=&level=&school=&class=
pub async fn list_spells(
    State(handlers): State<SpellHandlers>,
    Query(params): Query<SpellListParams>,
) -> Response {
    let filter = match params.into_filter() {
        Ok(filter) => filter,
        Err(raw) => return bad_request(format!("Invalid spell level: {}", raw)),
    };

    match handlers.list_handler.handle(ListSpellsQuery { filter }).await {
        Ok(spells) => (StatusCode::OK, Json(spells)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/spells/:index
pub async fn get_spell(
    State(handlers): State<SpellHandlers>,
    Path(index): Path<String>,
) -> Response {
    match handlers
        .get_handler
        .handle(GetSpellQuery { index: index.clone() })
        .await
    {
        Ok(Some(spell)) => (StatusCode::OK, Json(spell)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(ErrorCode::SpellNotFound, "Spell", &index)),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/spells/refresh
pub async fn refresh_spells(State(handlers): State<SpellHandlers>) -> Response {
    match handlers
        .refresh_handler
        .handle(RefreshSpellCacheCommand)
        .await
    {
        Ok(count) => (
            StatusCode::OK,
            Json(RefreshResponse {
                success: true,
                count,
            }),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

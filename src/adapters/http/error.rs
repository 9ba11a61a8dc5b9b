//! Error responses shared by every HTTP module.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::domain::character::CharacterError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationErrors};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(code: ErrorCode, resource_type: &str, id: &str) -> Self {
        Self {
            code: code.to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    /// One detail entry per failing field.
    pub fn validation(errors: &ValidationErrors) -> Self {
        let details = errors
            .iter()
            .map(|e| json!({ "field": e.field(), "message": e.to_string() }))
            .collect::<Vec<_>>();
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: format!("Validation failed: {} field(s) invalid", errors.len()),
            details: Some(serde_json::Value::Array(details)),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

pub(crate) fn character_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(ErrorCode::CharacterNotFound, "Character", id)),
    )
        .into_response()
}

/// Only reachable for ids that cannot parse; unknown item ids are a no-op.
pub(crate) fn equipment_item_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            code: "EQUIPMENT_ITEM_NOT_FOUND".to_string(),
            message: format!("Equipment item not found: {}", id),
            details: None,
        }),
    )
        .into_response()
}

pub(crate) fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}

pub(crate) fn json_rejection(rejection: JsonRejection) -> Response {
    bad_request(rejection.body_text())
}

pub(crate) fn handle_character_error(error: CharacterError) -> Response {
    match error {
        CharacterError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&errors)),
        )
            .into_response(),
        CharacterError::Rule(violation) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                code: violation.code().to_string(),
                message: violation.to_string(),
                details: None,
            }),
        )
            .into_response(),
        CharacterError::Infrastructure(e) => handle_domain_error(e),
    }
}

/// Infrastructure detail is logged, never returned.
pub(crate) fn handle_domain_error(error: DomainError) -> Response {
    error!(code = %error.code, message = %error.message, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("Internal server error")),
    )
        .into_response()
}

//! Full application router with its middleware stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{warn, Level};

use crate::config::ServerConfig;

use super::character::{character_routes, CharacterHandlers};
use super::health::health_routes;
use super::spell::{spell_routes, SpellHandlers};

/// Builds the application router.
///
/// Layers, innermost first: request timeout, tracing, CORS.
pub fn app_router(
    characters: CharacterHandlers,
    spells: SpellHandlers,
    config: &ServerConfig,
) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/api/characters", character_routes(characters))
        .nest("/api/spells", spell_routes(spells))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(config))
}

/// No configured origins allows any origin; unparsable origins are skipped.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let configured = config.cors_origins_list();
    if configured.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::adapters::memory::{InMemoryCharacterRepository, InMemorySpellRepository};
    use crate::application::handlers::spell::test_support::StubSpellSource;

    fn app(config: &ServerConfig) -> Router {
        app_router(
            CharacterHandlers::new(Arc::new(InMemoryCharacterRepository::new())),
            SpellHandlers::new(
                Arc::new(InMemorySpellRepository::new()),
                Arc::new(StubSpellSource::new(Vec::new())),
            ),
            config,
        )
    }

    #[tokio::test]
    async fn health_is_mounted_at_root() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn characters_are_mounted_under_api() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/api/characters")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let response = app(&config)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }
}

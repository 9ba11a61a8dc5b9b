//! HTTP adapters - REST API over the application handlers.
//!
//! Each area has its own module with dto, handlers and routes; `router`
//! composes them with the middleware stack.

pub mod character;
mod error;
mod health;
mod router;
pub mod spell;

pub use character::{character_routes, CharacterHandlers};
pub use error::ErrorResponse;
pub use health::{health_routes, HealthResponse};
pub use router::{app_router, build_cors_layer};
pub use spell::{spell_routes, SpellHandlers};

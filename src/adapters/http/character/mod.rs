//! HTTP adapter for character endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AcOverrideRequest, AmountRequest, CharacterResponse};
pub use handlers::CharacterHandlers;
pub use routes::character_routes;

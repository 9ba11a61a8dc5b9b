//! HTTP adapter for the SRD spell cache.

mod dto;
mod handlers;
mod routes;

pub use dto::{RefreshResponse, SpellListParams};
pub use handlers::SpellHandlers;
pub use routes::spell_routes;

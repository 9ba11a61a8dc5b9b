//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Persistent repositories (sqlx)
//! - `memory` - In-memory repositories for tests and throwaway runs
//! - `srd` - dnd5eapi.co spell source (reqwest)
//! - `http` - REST API (axum)

pub mod http;
pub mod memory;
pub mod sqlite;
pub mod srd;

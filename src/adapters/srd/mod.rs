//! SRD adapters - upstream spell data.

mod dnd5e_api_client;

pub use dnd5e_api_client::{Dnd5eApiClient, Dnd5eApiConfig, DEFAULT_SRD_BASE_URL};

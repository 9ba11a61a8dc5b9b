//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `character` - Character aggregate and the 5e rules applied to it
//! - `spell` - Cached SRD spell catalogue types

pub mod character;
pub mod foundation;
pub mod spell;

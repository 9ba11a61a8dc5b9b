//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types
//! that form the vocabulary of the character sheet domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError, ValidationErrors};
pub use ids::{CharacterId, EquipmentItemId, Slug};
pub use timestamp::Timestamp;

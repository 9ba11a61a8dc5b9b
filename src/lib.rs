//! D&D Sheet - Personal D&D 5e character sheet manager
//!
//! This crate implements the 5e rules a character sheet needs (modifiers,
//! hit points, spell slots, skills, armor class, encumbrance), a SQLite
//! character store, a read-through cache of SRD spells and a REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Per-level spell slot accounting.

use serde::{Deserialize, Serialize};

use super::RuleViolation;
use crate::domain::foundation::{ValidationError, ValidationErrors};

pub const MIN_SLOT_LEVEL: i32 = 1;
pub const MAX_SLOT_LEVEL: i32 = 9;

/// Slots of one spell level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlot {
    pub level: i32,
    pub used: i32,
    pub available: i32,
}

impl SpellSlot {
    pub fn new(level: i32, used: i32, available: i32) -> Self {
        Self {
            level,
            used,
            available,
        }
    }

    /// Slots still castable at this level.
    pub fn remaining(&self) -> i32 {
        (self.available - self.used).max(0)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !(MIN_SLOT_LEVEL..=MAX_SLOT_LEVEL).contains(&self.level) {
            errors.push(ValidationError::out_of_range(
                "level",
                MIN_SLOT_LEVEL,
                MAX_SLOT_LEVEL,
                self.level,
            ));
        }
        if self.used < 0 {
            errors.push(ValidationError::out_of_range("used", 0, i32::MAX, self.used));
        }
        if self.available < 0 {
            errors.push(ValidationError::out_of_range(
                "available",
                0,
                i32::MAX,
                self.available,
            ));
        }
        if self.used > self.available {
            errors.push(ValidationError::constraint(
                "used",
                format!(
                    "used ({}) cannot exceed available ({})",
                    self.used, self.available
                ),
            ));
        }
        errors.into_result()
    }
}

/// Spends one slot at `level`.
///
/// Fails when the level is missing or already exhausted.
pub fn use_spell_slot(slots: &[SpellSlot], level: i32) -> Result<Vec<SpellSlot>, RuleViolation> {
    match slots.iter().find(|slot| slot.level == level) {
        Some(slot) if slot.used < slot.available => {}
        _ => return Err(RuleViolation::NoSpellSlotsAvailable { level }),
    }
    Ok(slots
        .iter()
        .map(|slot| {
            if slot.level == level {
                SpellSlot {
                    used: slot.used + 1,
                    ..*slot
                }
            } else {
                *slot
            }
        })
        .collect())
}

/// Gives back one slot at `level`, never below zero used.
///
/// Unknown levels leave the slots unchanged.
pub fn restore_spell_slot(slots: &[SpellSlot], level: i32) -> Vec<SpellSlot> {
    slots
        .iter()
        .map(|slot| {
            if slot.level == level {
                SpellSlot {
                    used: (slot.used - 1).max(0),
                    ..*slot
                }
            } else {
                *slot
            }
        })
        .collect()
}

/// Resets every slot to unused.
pub fn long_rest(slots: &[SpellSlot]) -> Vec<SpellSlot> {
    slots
        .iter()
        .map(|slot| SpellSlot { used: 0, ..*slot })
        .collect()
}

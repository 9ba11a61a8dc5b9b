//! Hit point tracking: damage soaks temporary HP first, healing caps at max.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ValidationError, ValidationErrors};

/// Current, maximum and temporary hit points.
///
/// `current <= max` is not enforced here; a lowered `max` does not
/// retroactively clamp `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
    pub temp: i32,
}

impl HitPoints {
    pub fn new(current: i32, max: i32, temp: i32) -> Self {
        Self { current, max, temp }
    }

    /// Full health, no temporary HP.
    pub fn full(max: i32) -> Self {
        Self::new(max, max, 0)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.current < 0 {
            errors.push(ValidationError::out_of_range(
                "current",
                0,
                i32::MAX,
                self.current,
            ));
        }
        if self.max < 1 {
            errors.push(ValidationError::out_of_range("max", 1, i32::MAX, self.max));
        }
        if self.temp < 0 {
            errors.push(ValidationError::out_of_range("temp", 0, i32::MAX, self.temp));
        }
        errors.into_result()
    }
}

/// Applies damage: temp HP absorbs first, the remainder comes off current.
///
/// Non-positive amounts leave `hp` unchanged.
pub fn apply_damage(hp: HitPoints, amount: i32) -> HitPoints {
    if amount <= 0 {
        return hp;
    }
    let absorbed = amount.min(hp.temp.max(0));
    let remainder = amount - absorbed;
    HitPoints {
        current: hp.current.saturating_sub(remainder).max(0),
        max: hp.max,
        temp: (hp.temp - absorbed).max(0),
    }
}

/// Applies healing up to max. Temp HP is never touched.
///
/// Non-positive amounts leave `hp` unchanged.
pub fn apply_healing(hp: HitPoints, amount: i32) -> HitPoints {
    if amount <= 0 {
        return hp;
    }
    HitPoints {
        current: hp.current.saturating_add(amount).min(hp.max),
        ..hp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn temp_absorbs_damage_first() {
        let hp = HitPoints::new(20, 20, 5);
        assert_eq!(apply_damage(hp, 3), HitPoints::new(20, 20, 2));
    }

    #[test]
    fn damage_spills_over_into_current() {
        let hp = HitPoints::new(20, 20, 5);
        assert_eq!(apply_damage(hp, 8), HitPoints::new(17, 20, 0));
    }

    #[test]
    fn overkill_floors_at_zero() {
        let hp = HitPoints::new(10, 20, 0);
        assert_eq!(apply_damage(hp, 999), HitPoints::new(0, 20, 0));
    }

    #[test]
    fn healing_caps_at_max() {
        let hp = HitPoints::new(18, 20, 0);
        assert_eq!(apply_healing(hp, 10), HitPoints::new(20, 20, 0));
    }

    #[test]
    fn healing_leaves_temp_alone() {
        let hp = HitPoints::new(5, 20, 4);
        assert_eq!(apply_healing(hp, 3), HitPoints::new(8, 20, 4));
    }

    #[test]
    fn healing_clamps_to_lowered_max() {
        // max was lowered externally after the character was at 25
        let hp = HitPoints::new(25, 20, 0);
        assert_eq!(apply_healing(hp, 1).current, 20);
    }

    proptest! {
        #[test]
        fn non_positive_damage_is_noop(
            current in 0i32..500, max in 1i32..500, temp in 0i32..100, amount in -1000i32..=0
        ) {
            let hp = HitPoints::new(current, max, temp);
            prop_assert_eq!(apply_damage(hp, amount), hp);
        }

        #[test]
        fn non_positive_healing_is_noop(
            current in 0i32..500, max in 1i32..500, temp in 0i32..100, amount in -1000i32..=0
        ) {
            let hp = HitPoints::new(current, max, temp);
            prop_assert_eq!(apply_healing(hp, amount), hp);
        }

        #[test]
        fn damage_never_changes_max_or_goes_negative(
            current in 0i32..500, max in 1i32..500, temp in 0i32..100, amount in 1i32..2000
        ) {
            let after = apply_damage(HitPoints::new(current, max, temp), amount);
            prop_assert_eq!(after.max, max);
            prop_assert!(after.current >= 0);
            prop_assert!(after.temp >= 0);
        }
    }

    #[test]
    fn validate_rejects_zero_max_and_negatives() {
        let errors = HitPoints::new(-1, 0, -2).validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["current", "max", "temp"]);
    }

    #[test]
    fn validate_accepts_current_above_max() {
        assert!(HitPoints::new(30, 20, 0).validate().is_ok());
    }
}

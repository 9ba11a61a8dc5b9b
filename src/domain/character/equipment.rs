//! Carried equipment and encumbrance.

use serde::{Deserialize, Serialize};

use super::validation::check_text;
use crate::domain::foundation::{EquipmentItemId, ValidationError, ValidationErrors};

pub const MAX_ITEM_NAME_LENGTH: usize = 255;

/// One stack of items in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: EquipmentItemId,
    pub name: String,
    pub quantity: i32,
    pub weight: f64,
    #[serde(default)]
    pub equipped: bool,
}

impl EquipmentItem {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_item_fields(&self.name, self.quantity, self.weight)
    }

    /// Weight of the whole stack.
    pub fn total_weight(&self) -> f64 {
        self.weight * f64::from(self.quantity)
    }
}

/// An item as supplied by a caller; the id is assigned on add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEquipmentItem {
    pub name: String,
    pub quantity: i32,
    pub weight: f64,
    #[serde(default)]
    pub equipped: bool,
}

impl NewEquipmentItem {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_item_fields(&self.name, self.quantity, self.weight)
    }

    /// Assigns a fresh id.
    pub fn into_item(self) -> EquipmentItem {
        EquipmentItem {
            id: EquipmentItemId::new(),
            name: self.name,
            quantity: self.quantity,
            weight: self.weight,
            equipped: self.equipped,
        }
    }
}

fn validate_item_fields(name: &str, quantity: i32, weight: f64) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_text(&mut errors, "name", name, MAX_ITEM_NAME_LENGTH);
    if quantity < 1 {
        errors.push(ValidationError::out_of_range("quantity", 1, i32::MAX, quantity));
    }
    if !weight.is_finite() || weight < 0.0 {
        errors.push(ValidationError::invalid_format(
            "weight",
            format!("must be a finite number >= 0, got {}", weight),
        ));
    }
    errors.into_result()
}

/// Sum of `weight * quantity`; zero for an empty inventory.
pub fn calculate_total_weight(equipment: &[EquipmentItem]) -> f64 {
    equipment.iter().map(EquipmentItem::total_weight).sum()
}

/// Inventory with `item` appended.
pub fn add_item(equipment: &[EquipmentItem], item: EquipmentItem) -> Vec<EquipmentItem> {
    let mut next = equipment.to_vec();
    next.push(item);
    next
}

/// Inventory without the item `id`; unknown ids leave it unchanged.
pub fn remove_item(equipment: &[EquipmentItem], id: &EquipmentItemId) -> Vec<EquipmentItem> {
    equipment
        .iter()
        .filter(|item| &item.id != id)
        .cloned()
        .collect()
}

//! Weapon entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tmnt_core::error::CoreError;
use tmnt_core::types::{DbId, Timestamp};
use tmnt_core::validation::{validate_list, validate_required, MAX_NAME_LEN, MAX_TEXT_LEN};

/// A row from the `weapons` table. Grouped by `wielder`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Weapon {
    pub id: DbId,
    pub name: String,
    /// Serialized as `type`, stored as `weapon_type`.
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub wielder: String,
    pub description: String,
    pub special_moves: Json<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a weapon.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreateWeapon {
    pub name: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub wielder: String,
    pub description: String,
    #[serde(default)]
    pub special_moves: Vec<String>,
}

impl CreateWeapon {
    pub fn validated(self) -> Result<Self, CoreError> {
        validate_required("name", &self.name, MAX_NAME_LEN)?;
        validate_required("type", &self.weapon_type, MAX_NAME_LEN)?;
        validate_required("wielder", &self.wielder, MAX_NAME_LEN)?;
        validate_required("description", &self.description, MAX_TEXT_LEN)?;
        validate_list("special_moves", &self.special_moves)?;
        Ok(self)
    }
}

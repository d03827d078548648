//! Villain entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tmnt_core::error::CoreError;
use tmnt_core::types::{DbId, Timestamp};
use tmnt_core::validation::{
    normalize_optional, validate_list, validate_required, MAX_NAME_LEN, MAX_TEXT_LEN,
};

/// A row from the `villains` table. Unique by `name`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Villain {
    pub id: DbId,
    pub name: String,
    pub real_name: Option<String>,
    pub description: String,
    pub abilities: Json<Vec<String>>,
    pub first_appearance: String,
    pub threat_level: String,
    /// Name of the character this villain is the arch-enemy of, if known.
    pub arch_enemy_of: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a villain.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreateVillain {
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    pub description: String,
    #[serde(default)]
    pub abilities: Vec<String>,
    pub first_appearance: String,
    pub threat_level: String,
    #[serde(default)]
    pub arch_enemy_of: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateVillain {
    /// Check required fields and normalize blank optionals to `None`.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validate_required("name", &self.name, MAX_NAME_LEN)?;
        validate_required("description", &self.description, MAX_TEXT_LEN)?;
        validate_required("first_appearance", &self.first_appearance, MAX_NAME_LEN)?;
        validate_required("threat_level", &self.threat_level, MAX_NAME_LEN)?;
        validate_list("abilities", &self.abilities)?;
        self.real_name = normalize_optional(self.real_name);
        self.arch_enemy_of = normalize_optional(self.arch_enemy_of);
        self.image_url = normalize_optional(self.image_url);
        Ok(self)
    }
}

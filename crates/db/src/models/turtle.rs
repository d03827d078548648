//! Turtle entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tmnt_core::error::CoreError;
use tmnt_core::types::{DbId, Timestamp};
use tmnt_core::validation::{normalize_optional, validate_required, MAX_NAME_LEN, MAX_TEXT_LEN};

/// A row from the `turtles` table. Unique by `name`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Turtle {
    pub id: DbId,
    pub name: String,
    pub full_name: String,
    pub color: String,
    pub weapon: String,
    pub personality: String,
    pub favorite_pizza: String,
    pub catchphrase: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a turtle.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTurtle {
    pub name: String,
    pub full_name: String,
    pub color: String,
    pub weapon: String,
    pub personality: String,
    pub favorite_pizza: String,
    pub catchphrase: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateTurtle {
    /// Check required fields and normalize blank optionals to `None`.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validate_required("name", &self.name, MAX_NAME_LEN)?;
        validate_required("full_name", &self.full_name, MAX_NAME_LEN)?;
        validate_required("color", &self.color, MAX_NAME_LEN)?;
        validate_required("weapon", &self.weapon, MAX_NAME_LEN)?;
        validate_required("personality", &self.personality, MAX_TEXT_LEN)?;
        validate_required("favorite_pizza", &self.favorite_pizza, MAX_NAME_LEN)?;
        validate_required("catchphrase", &self.catchphrase, MAX_TEXT_LEN)?;
        self.image_url = normalize_optional(self.image_url);
        Ok(self)
    }
}

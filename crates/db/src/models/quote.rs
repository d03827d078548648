//! Quote entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tmnt_core::error::CoreError;
use tmnt_core::types::{DbId, Timestamp};
use tmnt_core::validation::{normalize_optional, validate_required, MAX_NAME_LEN, MAX_TEXT_LEN};

/// A row from the `quotes` table. Grouped by `character`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quote {
    pub id: DbId,
    pub text: String,
    pub character: String,
    /// Title of the episode the quote comes from, if known.
    pub episode: Option<String>,
    pub context: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a quote.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreateQuote {
    pub text: String,
    pub character: String,
    #[serde(default)]
    pub episode: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl CreateQuote {
    /// Check required fields and normalize blank optionals to `None`.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validate_required("text", &self.text, MAX_TEXT_LEN)?;
        validate_required("character", &self.character, MAX_NAME_LEN)?;
        self.episode = normalize_optional(self.episode);
        self.context = normalize_optional(self.context);
        Ok(self)
    }
}

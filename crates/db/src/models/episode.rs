//! Episode entity model and DTOs.
//!
//! Episodes carry two keys: the store-assigned `id` and the natural
//! `episode_id` used for lookups and updates.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tmnt_core::error::CoreError;
use tmnt_core::types::{DbId, Timestamp};
use tmnt_core::validation::{
    normalize_optional, validate_air_date, validate_list, validate_positive, validate_required,
    MAX_NAME_LEN, MAX_TEXT_LEN,
};

/// One entry of an episode's cast list.
///
/// `role` is free text. The catalog uses `main`, `recurring` and `guest`
/// throughout, and later seasons add labels such as `main_villain` and
/// `special_guest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CastMember {
    pub character_name: String,
    pub voice_actor: String,
    pub role: String,
}

/// A row from the `episodes` table. Unique by `episode_id`, grouped by `season`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub episode_id: i64,
    pub title: String,
    pub season: i64,
    pub episode_number: i64,
    pub air_date: String,
    pub synopsis: String,
    #[sqlx(rename = "cast_members")]
    pub cast: Option<Json<Vec<CastMember>>>,
    pub writer: Option<String>,
    pub director: Option<String>,
    pub notes: Option<String>,
    pub villains_featured: Option<Json<Vec<String>>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an episode.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEpisode {
    pub episode_id: i64,
    pub title: String,
    pub season: i64,
    pub episode_number: i64,
    pub air_date: String,
    pub synopsis: String,
    #[serde(default)]
    pub cast: Option<Vec<CastMember>>,
    #[serde(default)]
    pub writer: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub villains_featured: Option<Vec<String>>,
}

impl CreateEpisode {
    /// Check required fields and normalize blank optionals to `None`.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validate_positive("episode_id", self.episode_id)?;
        validate_required("title", &self.title, MAX_NAME_LEN)?;
        validate_positive("season", self.season)?;
        validate_positive("episode_number", self.episode_number)?;
        validate_air_date(&self.air_date)?;
        validate_required("synopsis", &self.synopsis, MAX_TEXT_LEN)?;
        if let Some(cast) = &self.cast {
            validate_cast(cast)?;
        }
        if let Some(villains) = &self.villains_featured {
            validate_list("villains_featured", villains)?;
        }
        self.writer = normalize_optional(self.writer);
        self.director = normalize_optional(self.director);
        self.notes = normalize_optional(self.notes);
        Ok(self)
    }
}

/// DTO for patching an episode. Absent (or `null`) fields are left untouched.
///
/// `episode_id` is the lookup key and cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEpisode {
    pub title: Option<String>,
    pub season: Option<i64>,
    pub episode_number: Option<i64>,
    pub air_date: Option<String>,
    pub synopsis: Option<String>,
    pub cast: Option<Vec<CastMember>>,
    pub writer: Option<String>,
    pub director: Option<String>,
    pub notes: Option<String>,
    pub villains_featured: Option<Vec<String>>,
}

impl UpdateEpisode {
    /// `true` when the payload names no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.season.is_none()
            && self.episode_number.is_none()
            && self.air_date.is_none()
            && self.synopsis.is_none()
            && self.cast.is_none()
            && self.writer.is_none()
            && self.director.is_none()
            && self.notes.is_none()
            && self.villains_featured.is_none()
    }

    /// Validate every present field with the same rules as creation.
    pub fn validated(self) -> Result<Self, CoreError> {
        if self.is_empty() {
            return Err(CoreError::Validation(
                "Update must set at least one field".to_string(),
            ));
        }
        if let Some(title) = &self.title {
            validate_required("title", title, MAX_NAME_LEN)?;
        }
        if let Some(season) = self.season {
            validate_positive("season", season)?;
        }
        if let Some(number) = self.episode_number {
            validate_positive("episode_number", number)?;
        }
        if let Some(air_date) = &self.air_date {
            validate_air_date(air_date)?;
        }
        if let Some(synopsis) = &self.synopsis {
            validate_required("synopsis", synopsis, MAX_TEXT_LEN)?;
        }
        if let Some(cast) = &self.cast {
            validate_cast(cast)?;
        }
        if let Some(villains) = &self.villains_featured {
            validate_list("villains_featured", villains)?;
        }
        for (field, value) in [
            ("writer", &self.writer),
            ("director", &self.director),
            ("notes", &self.notes),
        ] {
            if let Some(v) = value {
                validate_required(field, v, MAX_TEXT_LEN)?;
            }
        }
        Ok(self)
    }
}

fn validate_cast(cast: &[CastMember]) -> Result<(), CoreError> {
    for (i, member) in cast.iter().enumerate() {
        validate_required(
            &format!("cast[{i}].character_name"),
            &member.character_name,
            MAX_NAME_LEN,
        )?;
        validate_required(
            &format!("cast[{i}].voice_actor"),
            &member.voice_actor,
            MAX_NAME_LEN,
        )?;
        validate_required(&format!("cast[{i}].role"), &member.role, MAX_NAME_LEN)?;
    }
    Ok(())
}

//! Repository for the `episodes` table.

use sqlx::types::Json;
use sqlx::SqlitePool;
use tmnt_core::pagination::Page;

use crate::models::episode::{CreateEpisode, Episode, UpdateEpisode};
use crate::repositories::NOW;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, episode_id, title, season, episode_number, air_date, synopsis, \
     cast_members, writer, director, notes, villains_featured, \
     created_at, updated_at";

/// Provides paginated listing, lookup, insert-if-absent and partial update
/// for episodes. Lookups go through the natural key `episode_id`.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert an episode unless one with the same `episode_id` exists.
    ///
    /// The uniqueness check and the insert are a single statement against
    /// `uq_episodes_episode_id`, so concurrent creates cannot both succeed.
    /// Returns `None` when the key is taken; the existing row is untouched.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes
                (episode_id, title, season, episode_number, air_date, synopsis,
                 cast_members, writer, director, notes, villains_featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (episode_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let episode = sqlx::query_as::<_, Episode>(&query)
            .bind(input.episode_id)
            .bind(&input.title)
            .bind(input.season)
            .bind(input.episode_number)
            .bind(&input.air_date)
            .bind(&input.synopsis)
            .bind(input.cast.as_ref().map(Json))
            .bind(&input.writer)
            .bind(&input.director)
            .bind(&input.notes)
            .bind(input.villains_featured.as_ref().map(Json))
            .fetch_optional(pool)
            .await?;

        if episode.is_some() {
            tracing::debug!(episode_id = input.episode_id, "Episode inserted");
        }
        Ok(episode)
    }

    /// Find an episode by its natural key.
    pub async fn find_by_episode_id(
        pool: &SqlitePool,
        episode_id: i64,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE episode_id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(episode_id)
            .fetch_optional(pool)
            .await
    }

    /// List episodes in insertion order, optionally restricted to one season
    /// (`idx_episodes_season`), then windowed by `page`.
    pub async fn list(
        pool: &SqlitePool,
        season: Option<i64>,
        page: Page,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        match season {
            Some(season) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM episodes
                     WHERE season = $1
                     ORDER BY id ASC
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Episode>(&query)
                    .bind(season)
                    .bind(page.limit)
                    .bind(page.offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM episodes
                     ORDER BY id ASC
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Episode>(&query)
                    .bind(page.limit)
                    .bind(page.offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Apply the fields present in `input` to the episode with `episode_id`.
    ///
    /// Absent fields keep their stored value. Returns `None` if no episode
    /// has that key.
    pub async fn update(
        pool: &SqlitePool,
        episode_id: i64,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                title = COALESCE($2, title),
                season = COALESCE($3, season),
                episode_number = COALESCE($4, episode_number),
                air_date = COALESCE($5, air_date),
                synopsis = COALESCE($6, synopsis),
                cast_members = COALESCE($7, cast_members),
                writer = COALESCE($8, writer),
                director = COALESCE($9, director),
                notes = COALESCE($10, notes),
                villains_featured = COALESCE($11, villains_featured),
                updated_at = {NOW}
             WHERE episode_id = $1
             RETURNING {COLUMNS}"
        );
        let episode = sqlx::query_as::<_, Episode>(&query)
            .bind(episode_id)
            .bind(&input.title)
            .bind(input.season)
            .bind(input.episode_number)
            .bind(&input.air_date)
            .bind(&input.synopsis)
            .bind(input.cast.as_ref().map(Json))
            .bind(&input.writer)
            .bind(&input.director)
            .bind(&input.notes)
            .bind(input.villains_featured.as_ref().map(Json))
            .fetch_optional(pool)
            .await?;

        if episode.is_some() {
            tracing::debug!(episode_id, "Episode updated");
        }
        Ok(episode)
    }
}

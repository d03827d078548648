//! Repository for the `villains` table.

use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::villain::{CreateVillain, Villain};

pub(crate) const COLUMNS: &str = "id, name, real_name, description, abilities, first_appearance, \
                       threat_level, arch_enemy_of, image_url, created_at, updated_at";

/// Provides list, lookup-by-name and insert-if-absent for villains.
pub struct VillainRepo;

impl VillainRepo {
    /// Insert a villain unless one with the same `name` exists.
    ///
    /// Returns `None` when the name is taken.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateVillain,
    ) -> Result<Option<Villain>, sqlx::Error> {
        let query = format!(
            "INSERT INTO villains
                (name, real_name, description, abilities, first_appearance, threat_level,
                 arch_enemy_of, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Villain>(&query)
            .bind(&input.name)
            .bind(&input.real_name)
            .bind(&input.description)
            .bind(Json(&input.abilities))
            .bind(&input.first_appearance)
            .bind(&input.threat_level)
            .bind(&input.arch_enemy_of)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Find a villain by exact name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Villain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM villains WHERE name = $1");
        sqlx::query_as::<_, Villain>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List every villain.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Villain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM villains ORDER BY id ASC");
        sqlx::query_as::<_, Villain>(&query).fetch_all(pool).await
    }
}

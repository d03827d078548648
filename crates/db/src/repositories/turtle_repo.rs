//! Repository for the `turtles` table.

use sqlx::SqlitePool;

use crate::models::turtle::{CreateTurtle, Turtle};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, full_name, color, weapon, personality, favorite_pizza, \
                       catchphrase, image_url, created_at, updated_at";

/// Provides list, lookup-by-name and insert-if-absent for turtles.
pub struct TurtleRepo;

impl TurtleRepo {
    /// Insert a turtle unless one with the same `name` exists.
    ///
    /// Returns `None` when the name is taken; the existing row is untouched.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateTurtle,
    ) -> Result<Option<Turtle>, sqlx::Error> {
        let query = format!(
            "INSERT INTO turtles
                (name, full_name, color, weapon, personality, favorite_pizza, catchphrase,
                 image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Turtle>(&query)
            .bind(&input.name)
            .bind(&input.full_name)
            .bind(&input.color)
            .bind(&input.weapon)
            .bind(&input.personality)
            .bind(&input.favorite_pizza)
            .bind(&input.catchphrase)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Find a turtle by exact name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Turtle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM turtles WHERE name = $1");
        sqlx::query_as::<_, Turtle>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List every turtle.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Turtle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM turtles ORDER BY id ASC");
        sqlx::query_as::<_, Turtle>(&query).fetch_all(pool).await
    }
}

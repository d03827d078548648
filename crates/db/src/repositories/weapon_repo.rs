//! Repository for the `weapons` table.

use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::weapon::{CreateWeapon, Weapon};

const COLUMNS: &str =
    "id, name, weapon_type, wielder, description, special_moves, created_at, updated_at";

pub struct WeaponRepo;

impl WeaponRepo {
    /// Insert a weapon. Weapons have no natural key, so this always inserts.
    pub async fn create(pool: &SqlitePool, input: &CreateWeapon) -> Result<Weapon, sqlx::Error> {
        let query = format!(
            "INSERT INTO weapons (name, weapon_type, wielder, description, special_moves)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(&input.name)
            .bind(&input.weapon_type)
            .bind(&input.wielder)
            .bind(&input.description)
            .bind(Json(&input.special_moves))
            .fetch_one(pool)
            .await
    }

    /// List weapons, optionally restricted to one wielder (`idx_weapons_wielder`).
    pub async fn list(
        pool: &SqlitePool,
        wielder: Option<&str>,
    ) -> Result<Vec<Weapon>, sqlx::Error> {
        match wielder {
            Some(wielder) => {
                let query =
                    format!("SELECT {COLUMNS} FROM weapons WHERE wielder = $1 ORDER BY id ASC");
                sqlx::query_as::<_, Weapon>(&query)
                    .bind(wielder)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM weapons ORDER BY id ASC");
                sqlx::query_as::<_, Weapon>(&query).fetch_all(pool).await
            }
        }
    }
}

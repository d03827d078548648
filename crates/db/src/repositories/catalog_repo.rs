//! Operations spanning every collection: delete-by-key, reset, search.

use sqlx::SqlitePool;
use tmnt_core::collection::Collection;
use tmnt_core::search::like_pattern;
use tmnt_core::types::DbId;

use crate::models::catalog::{ClearReport, CollectionCount, SearchResults};
use crate::models::episode::Episode;
use crate::models::quote::Quote;
use crate::models::turtle::Turtle;
use crate::models::villain::Villain;
use crate::repositories::{episode_repo, quote_repo, turtle_repo, villain_repo};

pub struct CatalogRepo;

impl CatalogRepo {
    /// Delete one record by its store-assigned key.
    ///
    /// Returns `true` if a row was removed. Nothing cascades: deleting an
    /// episode leaves the villains it features in place.
    pub async fn delete_by_id(
        pool: &SqlitePool,
        collection: Collection,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", collection.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of records in a collection.
    pub async fn count(pool: &SqlitePool, collection: Collection) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", collection.table());
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// Delete every record in every collection.
    ///
    /// Runs in one transaction: either all collections are emptied or none.
    pub async fn clear_all(pool: &SqlitePool) -> Result<ClearReport, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut report = ClearReport::default();

        for collection in Collection::ALL {
            let query = format!("DELETE FROM {}", collection.table());
            let result = sqlx::query(&query).execute(&mut *tx).await?;
            report.deleted.push(CollectionCount {
                collection,
                count: result.rows_affected(),
            });
        }

        tx.commit().await?;
        tracing::info!(total = report.total(), "Cleared all collections");
        Ok(report)
    }

    /// Case-insensitive substring search over turtles, villains, episodes
    /// and quotes. `term` must already be trimmed and length-checked.
    ///
    /// SQLite `LIKE` folds ASCII case only.
    pub async fn search(pool: &SqlitePool, term: &str) -> Result<SearchResults, sqlx::Error> {
        let pattern = like_pattern(term);

        let query = format!(
            "SELECT {} FROM turtles
             WHERE name LIKE $1 ESCAPE '\\'
                OR weapon LIKE $1 ESCAPE '\\'
                OR personality LIKE $1 ESCAPE '\\'
             ORDER BY id ASC",
            turtle_repo::COLUMNS
        );
        let turtles = sqlx::query_as::<_, Turtle>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

        let query = format!(
            "SELECT {} FROM villains
             WHERE name LIKE $1 ESCAPE '\\'
                OR description LIKE $1 ESCAPE '\\'
             ORDER BY id ASC",
            villain_repo::COLUMNS
        );
        let villains = sqlx::query_as::<_, Villain>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

        let query = format!(
            "SELECT {} FROM episodes
             WHERE title LIKE $1 ESCAPE '\\'
                OR synopsis LIKE $1 ESCAPE '\\'
             ORDER BY id ASC",
            episode_repo::COLUMNS
        );
        let episodes = sqlx::query_as::<_, Episode>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

        let query = format!(
            "SELECT {} FROM quotes
             WHERE text LIKE $1 ESCAPE '\\'
                OR character LIKE $1 ESCAPE '\\'
             ORDER BY id ASC",
            quote_repo::COLUMNS
        );
        let quotes = sqlx::query_as::<_, Quote>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

        Ok(SearchResults {
            turtles,
            villains,
            episodes,
            quotes,
        })
    }
}

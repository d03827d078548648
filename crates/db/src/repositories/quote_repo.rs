//! Repository for the `quotes` table.

use sqlx::SqlitePool;

use crate::models::quote::{CreateQuote, Quote};

pub(crate) const COLUMNS: &str = "id, text, character, episode, context, created_at, updated_at";

/// Provides insert, listing, and positional access for quotes.
pub struct QuoteRepo;

impl QuoteRepo {
    /// Insert a quote. Quotes have no natural key, so this always inserts.
    pub async fn create(pool: &SqlitePool, input: &CreateQuote) -> Result<Quote, sqlx::Error> {
        let query = format!(
            "INSERT INTO quotes (text, character, episode, context)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(&input.text)
            .bind(&input.character)
            .bind(&input.episode)
            .bind(&input.context)
            .fetch_one(pool)
            .await
    }

    /// List quotes, optionally restricted to one character (`idx_quotes_character`).
    pub async fn list(
        pool: &SqlitePool,
        character: Option<&str>,
    ) -> Result<Vec<Quote>, sqlx::Error> {
        match character {
            Some(character) => {
                let query =
                    format!("SELECT {COLUMNS} FROM quotes WHERE character = $1 ORDER BY id ASC");
                sqlx::query_as::<_, Quote>(&query)
                    .bind(character)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM quotes ORDER BY id ASC");
                sqlx::query_as::<_, Quote>(&query).fetch_all(pool).await
            }
        }
    }

    /// Number of stored quotes.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quotes")
            .fetch_one(pool)
            .await
    }

    /// The quote at zero-based `index` in insertion order.
    pub async fn find_nth(pool: &SqlitePool, index: i64) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quotes ORDER BY id ASC LIMIT 1 OFFSET $1");
        sqlx::query_as::<_, Quote>(&query)
            .bind(index)
            .fetch_optional(pool)
            .await
    }
}

//! Query parameter types for API handlers.
//!
//! Fields are parsed as typed options; range checks happen in the handlers
//! through `tmnt_core` so every violation maps to `VALIDATION_ERROR`.

use serde::Deserialize;

/// `GET /episodes?season=&limit=&offset=`
#[derive(Debug, Default, Deserialize)]
pub struct EpisodeListParams {
    pub season: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /quotes?character=`
#[derive(Debug, Default, Deserialize)]
pub struct QuoteListParams {
    pub character: Option<String>,
}

/// `GET /quotes/random?seed=`
#[derive(Debug, Default, Deserialize)]
pub struct RandomQuoteParams {
    pub seed: Option<i64>,
}

/// `GET /weapons?wielder=`
#[derive(Debug, Default, Deserialize)]
pub struct WeaponListParams {
    pub wielder: Option<String>,
}

/// `GET /search?q=&limit=&offset=`
///
/// `limit` and `offset` apply to each result group separately.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

//! Service index at `/api`.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Endpoints {
    pub turtles: &'static str,
    pub villains: &'static str,
    pub episodes: &'static str,
    pub quotes: &'static str,
    pub random_quote: &'static str,
    pub weapons: &'static str,
    pub search: &'static str,
    pub health: &'static str,
}

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// GET /api
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the TMNT API!",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            turtles: "/api/v1/turtles",
            villains: "/api/v1/villains",
            episodes: "/api/v1/episodes",
            quotes: "/api/v1/quotes",
            random_quote: "/api/v1/quotes/random",
            weapons: "/api/v1/weapons",
            search: "/api/v1/search?q=query",
            health: "/health",
        },
    })
}

/// Mount the service index (root level).
pub fn router() -> Router<AppState> {
    Router::new().route("/api", get(index))
}

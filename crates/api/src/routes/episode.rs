use axum::routing::get;
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{episode_id}     -> get_by_episode_id
/// PATCH  /{episode_id}     -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list).post(episode::create))
        .route(
            "/{episode_id}",
            get(episode::get_by_episode_id).patch(episode::update),
        )
}

use axum::routing::get;
use axum::Router;

use crate::handlers::villain;
use crate::state::AppState;

/// Routes mounted at `/villains`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /{name}     -> get_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(villain::list).post(villain::create))
        .route("/{name}", get(villain::get_by_name))
}

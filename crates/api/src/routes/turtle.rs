use axum::routing::get;
use axum::Router;

use crate::handlers::turtle;
use crate::state::AppState;

/// Routes mounted at `/turtles`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /{name}     -> get_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(turtle::list).post(turtle::create))
        .route("/{name}", get(turtle::get_by_name))
}

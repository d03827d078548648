use axum::routing::delete;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// DELETE /                      -> clear_all
/// DELETE /{collection}/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", delete(records::clear_all))
        .route("/{collection}/{id}", delete(records::delete))
}

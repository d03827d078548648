use axum::routing::get;
use axum::Router;

use crate::handlers::quote;
use crate::state::AppState;

/// Routes mounted at `/quotes`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /random     -> random
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quote::list).post(quote::create))
        .route("/random", get(quote::random))
}

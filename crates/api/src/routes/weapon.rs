use axum::routing::get;
use axum::Router;

use crate::handlers::weapon;
use crate::state::AppState;

/// Routes mounted at `/weapons`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(weapon::list).post(weapon::create))
}

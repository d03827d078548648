pub mod episode;
pub mod health;
pub mod index;
pub mod quote;
pub mod records;
pub mod turtle;
pub mod villain;
pub mod weapon;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /turtles                                         list, create
/// /turtles/{name}                                  get by name
///
/// /villains                                        list, create
/// /villains/{name}                                 get by name
///
/// /episodes                                        list (?season, limit, offset), create
/// /episodes/{episode_id}                           get, patch
///
/// /quotes                                          list (?character), create
/// /quotes/random                                   random or seeded pick (?seed)
///
/// /weapons                                         list (?wielder), create
///
/// /search                                          search (?q)
///
/// /records                                         clear all (DELETE, gated)
/// /records/{collection}/{id}                       delete by key (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/turtles", turtle::router())
        .nest("/villains", villain::router())
        .nest("/episodes", episode::router())
        .nest("/quotes", quote::router())
        .nest("/weapons", weapon::router())
        .nest("/records", records::router())
        .route("/search", get(handlers::search::search))
}

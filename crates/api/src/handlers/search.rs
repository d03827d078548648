//! Handler for catalog-wide search.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tmnt_core::pagination::Page;
use tmnt_core::search::normalize_query;
use tmnt_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/search?q=&limit=&offset=
///
/// Case-insensitive substring match over turtles, villains, episodes and
/// quotes, grouped by collection. Each group is windowed by `limit`/`offset`
/// (default 10 per group).
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = normalize_query(&params.q)?;
    let page = Page::from_params(params.limit, params.offset)?;
    let results = CatalogRepo::search(&state.pool, &term).await?.paged(page);
    Ok(Json(DataResponse { data: results }))
}

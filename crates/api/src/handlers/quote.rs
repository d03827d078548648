//! Handlers for the `/quotes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tmnt_core::error::CoreError;
use tmnt_core::random::pick_index;
use tmnt_core::validation::normalize_optional;
use tmnt_db::models::quote::CreateQuote;
use tmnt_db::repositories::QuoteRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::{QuoteListParams, RandomQuoteParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/quotes?character=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<QuoteListParams>,
) -> AppResult<impl IntoResponse> {
    let character = normalize_optional(params.character);
    let quotes = QuoteRepo::list(&state.pool, character.as_deref()).await?;
    Ok(Json(DataResponse { data: quotes }))
}

/// GET /api/v1/quotes/random?seed=
///
/// A seed selects the quote at `seed mod count` in insertion order.
pub async fn random(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RandomQuoteParams>,
) -> AppResult<impl IntoResponse> {
    let count = QuoteRepo::count(&state.pool).await?;
    let index = pick_index("Quote", usize::try_from(count).unwrap_or(0), params.seed)?;

    // The collection may shrink between the count and the fetch.
    let quote = QuoteRepo::find_nth(&state.pool, index as i64)
        .await?
        .ok_or(CoreError::EmptyCollection { entity: "Quote" })?;
    Ok(Json(DataResponse { data: quote }))
}

/// POST /api/v1/quotes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuote>,
) -> AppResult<impl IntoResponse> {
    let input = input.validated()?;
    let quote = QuoteRepo::create(&state.pool, &input).await?;

    tracing::info!(quote_id = quote.id, character = %quote.character, "Quote created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: quote })))
}

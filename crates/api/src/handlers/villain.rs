//! Handlers for the `/villains` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tmnt_core::error::CoreError;
use tmnt_db::models::villain::CreateVillain;
use tmnt_db::repositories::VillainRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/villains
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let villains = VillainRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: villains }))
}

/// GET /api/v1/villains/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let villain = VillainRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Villain", &name))?;
    Ok(Json(DataResponse { data: villain }))
}

/// POST /api/v1/villains
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVillain>,
) -> AppResult<impl IntoResponse> {
    let input = input.validated()?;
    let villain = VillainRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::already_exists("Villain", &input.name))?;

    tracing::info!(villain_id = villain.id, name = %villain.name, "Villain created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: villain })))
}

//! Handlers for the `/turtles` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tmnt_core::error::CoreError;
use tmnt_db::models::turtle::CreateTurtle;
use tmnt_db::repositories::TurtleRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/turtles
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let turtles = TurtleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: turtles }))
}

/// GET /api/v1/turtles/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let turtle = TurtleRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| CoreError::not_found("Turtle", &name))?;
    Ok(Json(DataResponse { data: turtle }))
}

/// POST /api/v1/turtles
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTurtle>,
) -> AppResult<impl IntoResponse> {
    let input = input.validated()?;
    let turtle = TurtleRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::already_exists("Turtle", &input.name))?;

    tracing::info!(turtle_id = turtle.id, name = %turtle.name, "Turtle created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: turtle })))
}

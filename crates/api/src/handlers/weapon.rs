//! Handlers for the `/weapons` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tmnt_core::validation::normalize_optional;
use tmnt_db::models::weapon::CreateWeapon;
use tmnt_db::repositories::WeaponRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::WeaponListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/weapons?wielder=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<WeaponListParams>,
) -> AppResult<impl IntoResponse> {
    let wielder = normalize_optional(params.wielder);
    let weapons = WeaponRepo::list(&state.pool, wielder.as_deref()).await?;
    Ok(Json(DataResponse { data: weapons }))
}

/// POST /api/v1/weapons
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateWeapon>,
) -> AppResult<impl IntoResponse> {
    let input = input.validated()?;
    let weapon = WeaponRepo::create(&state.pool, &input).await?;

    tracing::info!(weapon_id = weapon.id, wielder = %weapon.wielder, "Weapon created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: weapon })))
}

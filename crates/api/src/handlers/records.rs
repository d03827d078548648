//! Handlers for the collection-generic `/records` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tmnt_core::collection::Collection;
use tmnt_core::error::CoreError;
use tmnt_core::types::DbId;
use tmnt_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// DELETE /api/v1/records/{collection}/{id}
///
/// `id` is the store-assigned key, not a natural key.
pub async fn delete(
    State(state): State<AppState>,
    AppPath((collection, id)): AppPath<(String, DbId)>,
) -> AppResult<StatusCode> {
    let collection: Collection = collection.parse()?;
    let deleted = CatalogRepo::delete_by_id(&state.pool, collection, id).await?;
    if !deleted {
        return Err(CoreError::not_found(collection.entity(), id).into());
    }

    tracing::info!(%collection, id, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/records
///
/// Empties every collection. Refused unless `ENABLE_RESET` is set.
pub async fn clear_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    if !state.config.enable_reset {
        return Err(CoreError::Forbidden("Reset is disabled on this server".to_string()).into());
    }

    let report = CatalogRepo::clear_all(&state.pool).await?;
    Ok(Json(DataResponse { data: report }))
}

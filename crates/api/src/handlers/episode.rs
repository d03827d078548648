//! Handlers for the `/episodes` resource.
//!
//! Episodes are addressed by their natural `episode_id`, not the internal
//! row key. Removal goes through `/records/episodes/{id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tmnt_core::error::CoreError;
use tmnt_core::pagination::{validate_season_filter, Page};
use tmnt_db::models::episode::{CreateEpisode, UpdateEpisode};
use tmnt_db::repositories::EpisodeRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::EpisodeListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/episodes?season=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<EpisodeListParams>,
) -> AppResult<impl IntoResponse> {
    let season = validate_season_filter(params.season)?;
    let page = Page::from_params(params.limit, params.offset)?;

    let episodes = EpisodeRepo::list(&state.pool, season, page).await?;
    Ok(Json(DataResponse { data: episodes }))
}

/// GET /api/v1/episodes/{episode_id}
pub async fn get_by_episode_id(
    State(state): State<AppState>,
    AppPath(episode_id): AppPath<i64>,
) -> AppResult<impl IntoResponse> {
    let episode = EpisodeRepo::find_by_episode_id(&state.pool, episode_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Episode", episode_id))?;
    Ok(Json(DataResponse { data: episode }))
}

/// POST /api/v1/episodes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEpisode>,
) -> AppResult<impl IntoResponse> {
    let input = input.validated()?;
    let episode = EpisodeRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::already_exists("Episode", input.episode_id))?;

    tracing::info!(
        episode_id = episode.episode_id,
        season = episode.season,
        "Episode created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: episode })))
}

/// PATCH /api/v1/episodes/{episode_id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(episode_id): AppPath<i64>,
    AppJson(input): AppJson<UpdateEpisode>,
) -> AppResult<impl IntoResponse> {
    let input = input.validated()?;
    let episode = EpisodeRepo::update(&state.pool, episode_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Episode", episode_id))?;

    tracing::info!(episode_id, "Episode updated");
    Ok(Json(DataResponse { data: episode }))
}

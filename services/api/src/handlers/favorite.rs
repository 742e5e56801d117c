use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::favorite::{AddFavoriteUseCase, RemoveFavoriteUseCase};

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

// ── POST /api/favorites/{notice_id} ──────────────────────────────────────────

pub async fn add_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path(notice_id): Path<i32>,
) -> Result<Json<StatusResponse>, ApiError> {
    let usecase = AddFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    usecase.execute(identity.user_id, notice_id).await?;
    Ok(Json(StatusResponse { status: "ok" }))
}

// ── DELETE /api/favorites/{notice_id} ────────────────────────────────────────

pub async fn remove_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path(notice_id): Path<i32>,
) -> Result<Json<StatusResponse>, ApiError> {
    let usecase = RemoveFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    usecase.execute(identity.user_id, notice_id).await?;
    Ok(Json(StatusResponse { status: "ok" }))
}

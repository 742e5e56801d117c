use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::collect::RunCollectorsUseCase;

// ── GET /api/admin/update ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RunUpdateResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Blocks until the collector run finishes; the sidecar bounds its own runtime.
pub async fn run_update(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<RunUpdateResponse>, ApiError> {
    let usecase = RunCollectorsUseCase {
        users: state.user_repo(),
        collectors: state.collectors.clone(),
    };
    usecase.execute(identity.user_id).await?;
    Ok(Json(RunUpdateResponse {
        status: "ok",
        message: "update finished",
    }))
}

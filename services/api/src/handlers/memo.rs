use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::memo::{CreateMemoInput, CreateMemoUseCase};

// ── POST /api/memos/{notice_id} ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMemoRequest {
    pub memo: String,
}

#[derive(Serialize)]
pub struct CreateMemoResponse {
    pub status: &'static str,
}

pub async fn create_memo(
    identity: Identity,
    State(state): State<AppState>,
    Path(notice_id): Path<i32>,
    Json(body): Json<CreateMemoRequest>,
) -> Result<Json<CreateMemoResponse>, ApiError> {
    let usecase = CreateMemoUseCase {
        memos: state.memo_repo(),
    };
    usecase
        .execute(
            identity.user_id,
            CreateMemoInput {
                notice_id,
                body: body.memo,
            },
        )
        .await?;
    Ok(Json(CreateMemoResponse { status: "ok" }))
}

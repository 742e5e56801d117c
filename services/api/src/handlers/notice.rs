use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ApiError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::notice::ListNoticesUseCase;

// ── GET /api/notices ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct NoticeResponse {
    pub id: i32,
    pub title: String,
    pub client: String,
    #[serde(serialize_with = "eers_core::serde::to_rfc3339_ms")]
    pub date: chrono::DateTime<chrono::Utc>,
    pub link: String,
    pub office: String,
}

#[derive(Serialize)]
pub struct NoticeListResponse {
    pub status: &'static str,
    pub data: Vec<NoticeResponse>,
}

pub async fn list_notices(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<NoticeListResponse>, ApiError> {
    let usecase = ListNoticesUseCase {
        notices: state.notice_repo(),
    };
    let notices = usecase.execute().await?;
    let data = notices
        .into_iter()
        .map(|notice| NoticeResponse {
            id: notice.id,
            title: notice.title,
            client: notice.client,
            date: notice.notice_date,
            link: notice.detail_link,
            office: notice.office,
        })
        .collect();
    Ok(Json(NoticeListResponse { status: "ok", data }))
}

use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::cookie::set_session_cookie;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::code::{RequestCodeInput, RequestCodeUseCase};
use crate::usecase::session::{VerifyCodeInput, VerifyCodeUseCase};

// ── POST /auth/request-code ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RequestCodeRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct RequestCodeResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeRequest>,
) -> Result<Json<RequestCodeResponse>, ApiError> {
    let usecase = RequestCodeUseCase {
        codes: state.otp_code_repo(),
        mailer: state.mailer.clone(),
    };
    usecase
        .execute(RequestCodeInput { email: body.email })
        .await?;
    Ok(Json(RequestCodeResponse {
        status: "ok",
        message: "code sent",
    }))
}

// ── POST /auth/verify-code ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct VerifyCodeResponse {
    pub status: &'static str,
    pub token: String,
}

pub async fn verify_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<(CookieJar, Json<VerifyCodeResponse>), ApiError> {
    let usecase = VerifyCodeUseCase {
        codes: state.otp_code_repo(),
        users: state.user_repo(),
        sessions: state.session_repo(),
        admin_email: state.admin_email.clone(),
    };
    let output = usecase
        .execute(VerifyCodeInput {
            email: body.email,
            code: body.code,
        })
        .await?;

    // The token rides both the Set-Cookie header (browser clients) and the
    // body (CLI clients that send it back as a bearer header).
    let jar = set_session_cookie(jar, output.token.clone());
    Ok((
        jar,
        Json(VerifyCodeResponse {
            status: "ok",
            token: output.token,
        }),
    ))
}

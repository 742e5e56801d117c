//! Session guard: resolves the caller's credential to a user id.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::cookie::AUTH_TOKEN;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::session::AuthenticateUseCase;

/// Authenticated caller, resolved from the session-token cookie or an
/// `Authorization: Bearer` header (cookie wins when both are present).
///
/// Rejects with 401 when the credential is absent, unknown, or expired.
/// Role enforcement (403) is done by the use cases after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    // axum-core 0.5 wants `fn -> impl Future + Send` here, not `async fn`:
    // with precise capturing (Rust 1.82+), `async fn` captures lifetimes
    // differently and trips E0195. Read the request synchronously, then
    // return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = token_from_parts(parts);
        let state = state.clone();

        async move {
            let token = token.ok_or(ApiError::Unauthenticated)?;
            let authenticate = AuthenticateUseCase {
                sessions: state.session_repo(),
            };
            let user_id = authenticate.execute(&token).await?;
            Ok(Self { user_id })
        }
    }
}

fn token_from_parts(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(AUTH_TOKEN) {
        return Some(cookie.value().to_owned());
    }
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::to_owned)
}

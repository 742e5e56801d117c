use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness probe. Services that hold warm-up
/// state can mount their own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

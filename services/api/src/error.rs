use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid code")]
    InvalidCode,
    #[error("code expired")]
    ExpiredCode,
    #[error("login required")]
    Unauthenticated,
    #[error("session expired or invalid")]
    SessionExpired,
    #[error("admin only")]
    Forbidden,
    #[error("email delivery failed")]
    DeliveryFailed(#[source] anyhow::Error),
    #[error("collector run failed")]
    CollectorFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCode => "INVALID_CODE",
            Self::ExpiredCode => "EXPIRED_CODE",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::Forbidden => "FORBIDDEN",
            Self::DeliveryFailed(_) => "DELIVERY_FAILED",
            Self::CollectorFailed(_) => "COLLECTOR_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCode
            | Self::ExpiredCode
            | Self::Unauthenticated
            | Self::SessionExpired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::DeliveryFailed(_) | Self::CollectorFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status
        // for all requests, and 4xx are expected client errors. The response body
        // carries the static Display string; the anyhow chain is logged, never
        // serialized.
        match &self {
            Self::DeliveryFailed(e) | Self::CollectorFailed(e) | Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "request failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use eers_core::health::{healthz, readyz};
use eers_core::middleware::request_id_layer;

use crate::handlers::{
    admin::run_update,
    auth::{request_code, verify_code},
    favorite::{add_favorite, remove_favorite},
    memo::create_memo,
    notice::list_notices,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Sign-in
        .route("/auth/request-code", post(request_code))
        .route("/auth/verify-code", post(verify_code))
        // Notices
        .route("/api/notices", get(list_notices))
        // Favorites
        .route("/api/favorites/{notice_id}", post(add_favorite))
        .route("/api/favorites/{notice_id}", delete(remove_favorite))
        // Memos
        .route("/api/memos/{notice_id}", post(create_memo))
        // Admin
        .route("/api/admin/update", get(run_update))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

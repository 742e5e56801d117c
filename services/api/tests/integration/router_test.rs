use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use eers_api::infra::collector::HttpCollectorRunner;
use eers_api::infra::mailer::{AppMailer, LogMailer};
use eers_api::router::build_router;
use eers_api::state::AppState;

/// Router wired to a disconnected database: enough to exercise routing,
/// health probes, and the session guard's credential checks.
fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        mailer: AppMailer::Log(LogMailer),
        collectors: HttpCollectorRunner::new(
            reqwest::Client::new(),
            "http://localhost:0/run".to_owned(),
        ),
        admin_email: None,
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_serve_health_probes() {
    let server = test_server();

    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get("/readyz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_reject_every_protected_route_without_credential() {
    let server = test_server();

    let protected = [
        server.get("/api/notices").await,
        server.post("/api/favorites/1").await,
        server.delete("/api/favorites/1").await,
        server.post("/api/memos/1").await,
        server.get("/api/admin/update").await,
    ];

    for response in protected {
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["kind"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn should_return_404_for_unknown_route() {
    let server = test_server();

    let response = server.get("/api/unknown").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

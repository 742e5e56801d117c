use sea_orm::Database;
use tracing::info;

use eers_api::config::ApiConfig;
use eers_api::infra::collector::HttpCollectorRunner;
use eers_api::infra::mailer::{AppMailer, LogMailer, RelayMailer};
use eers_api::router::build_router;
use eers_api::state::AppState;

#[tokio::main]
async fn main() {
    eers_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let client = reqwest::Client::new();

    let mailer = match config.mail_relay_url {
        Some(url) => AppMailer::Relay(RelayMailer::new(
            client.clone(),
            url,
            config.mail_relay_token,
            config.mail_from,
        )),
        None => {
            info!("MAIL_RELAY_URL not set, sign-in mails will be logged only");
            AppMailer::Log(LogMailer)
        }
    };

    let state = AppState {
        db,
        mailer,
        collectors: HttpCollectorRunner::new(client, config.collector_url),
        admin_email: config.admin_email,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

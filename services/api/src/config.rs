/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `API_PORT`.
    pub api_port: u16,
    /// HTTP endpoint that triggers a collector run (e.g. "http://collector:8080/run").
    pub collector_url: String,
    /// HTTP mail relay endpoint. When unset, outgoing mail is logged instead.
    pub mail_relay_url: Option<String>,
    /// Bearer token for the mail relay, if it requires one.
    pub mail_relay_token: Option<String>,
    /// From address on sign-in mails (default "noreply@eers.local"). Env var: `MAIL_FROM`.
    pub mail_from: String,
    /// Address provisioned with the admin role on first login. Env var: `ADMIN_EMAIL`.
    pub admin_email: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            collector_url: std::env::var("COLLECTOR_URL").expect("COLLECTOR_URL"),
            mail_relay_url: std::env::var("MAIL_RELAY_URL").ok(),
            mail_relay_token: std::env::var("MAIL_RELAY_TOKEN").ok(),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "noreply@eers.local".to_owned()),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
        }
    }
}

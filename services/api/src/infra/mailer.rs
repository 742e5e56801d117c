use serde::Serialize;
use tracing::info;

use crate::domain::repository::Mailer;
use crate::error::ApiError;

/// Request body the HTTP mail relay expects.
#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

// ── HTTP relay mailer ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RelayMailer {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
    from: String,
}

impl RelayMailer {
    pub fn new(client: reqwest::Client, url: String, token: Option<String>, from: String) -> Self {
        Self {
            client,
            url,
            token,
            from,
        }
    }
}

impl Mailer for RelayMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        let mut request = self.client.post(&self.url).json(&RelayMessage {
            from: &self.from,
            to,
            subject,
            text: body,
        });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::DeliveryFailed(e.into()))?;
        if !response.status().is_success() {
            return Err(ApiError::DeliveryFailed(anyhow::anyhow!(
                "mail relay returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

// ── Log mailer ───────────────────────────────────────────────────────────────

/// Local dev sender that logs the message instead of delivering it.
#[derive(Clone)]
pub struct LogMailer;

impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        info!(%to, %subject, %body, "mail send stub");
        Ok(())
    }
}

// ── Runtime dispatch ─────────────────────────────────────────────────────────

/// Mailer variant picked at startup. Async trait methods aren't object-safe,
/// so state holds this enum rather than a boxed trait object.
#[derive(Clone)]
pub enum AppMailer {
    Relay(RelayMailer),
    Log(LogMailer),
}

impl Mailer for AppMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        match self {
            AppMailer::Relay(mailer) => mailer.send(to, subject, body).await,
            AppMailer::Log(mailer) => mailer.send(to, subject, body).await,
        }
    }
}

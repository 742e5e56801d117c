use crate::domain::repository::CollectorRunner;
use crate::error::ApiError;

/// Kicks the scraper sidecar over HTTP and waits for the run to finish.
/// The sidecar owns the notice table contents; this side only triggers it.
#[derive(Clone)]
pub struct HttpCollectorRunner {
    client: reqwest::Client,
    url: String,
}

impl HttpCollectorRunner {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

impl CollectorRunner for HttpCollectorRunner {
    async fn run_all(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(&self.url)
            .send()
            .await
            .map_err(|e| ApiError::CollectorFailed(e.into()))?;
        if !response.status().is_success() {
            return Err(ApiError::CollectorFailed(anyhow::anyhow!(
                "collector returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

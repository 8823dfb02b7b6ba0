use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed with status {status}: {message}")]
    RequestFailed { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Failed to read response: {0}")]
    BodyError(#[source] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Remote list contains no user agents")]
    EmptyList,

    #[error("HTTP client unavailable")]
    ClientUnavailable,
}

pub struct UserAgentFetcher {
    client: Client,
}

impl UserAgentFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(crate::user_agent())
            .gzip(true)
            .brotli(true)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Download the list of user agents published at `url`.
    ///
    /// A single attempt is made; the body must be a JSON array of strings.
    pub async fn fetch(&self, url: &str) -> Result<Vec<String>, FetchError> {
        tracing::debug!("Fetching user agents: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("User agent fetch failed with status {}: {}", status, url);

            let message = format!(
                "{} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );

            return Err(FetchError::RequestFailed { status, message });
        }

        let body = response.bytes().await.map_err(FetchError::BodyError)?;

        let user_agents: Vec<String> = serde_json::from_slice(&body)?;
        if user_agents.is_empty() {
            return Err(FetchError::EmptyList);
        }

        tracing::info!("Fetched {} user agents from {}", user_agents.len(), url);

        Ok(user_agents)
    }
}

//! Shared HTTP client construction and GET helpers for document fetches.
//!
//! The client is built once and only read afterwards, so one extractor can
//! serve any number of concurrent requests.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::user_agent;

use super::ExtractError;

/// Network settings for document fetches.
///
/// Timeouts left as `None` fall back to the transport defaults.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Optional TCP connect timeout.
    pub connect_timeout: Option<Duration>,
    /// Optional per-read timeout; resets after every successful read.
    pub read_timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: user_agent::default_fetch_user_agent(),
            connect_timeout: None,
            read_timeout: None,
        }
    }
}

/// Builds the fetch client from `config`.
///
/// # Errors
///
/// Returns [`ExtractError::ClientBuild`] when client construction fails.
pub(crate) fn build_fetch_client(config: &FetchConfig) -> Result<Client, ExtractError> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .gzip(true);

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(read_timeout) = config.read_timeout {
        builder = builder.read_timeout(read_timeout);
    }

    builder
        .build()
        .map_err(|source| ExtractError::ClientBuild { source })
}

/// Sends a GET and rejects non-2xx responses.
async fn get_success(client: &Client, url: &str) -> Result<Response, ExtractError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ExtractError::network(url, e))?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, status = status.as_u16(), "document fetch returned error status");
        return Err(ExtractError::http_status(url, status.as_u16()));
    }
    debug!(url, status = status.as_u16(), "document fetched");
    Ok(response)
}

/// Fetches the raw body of `url`.
pub(crate) async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, ExtractError> {
    let response = get_success(client, url).await?;
    let body = response
        .bytes()
        .await
        .map_err(|e| ExtractError::network(url, e))?;
    Ok(body.to_vec())
}

/// Fetches the body of `url` decoded as text.
pub(crate) async fn fetch_text(client: &Client, url: &str) -> Result<String, ExtractError> {
    let response = get_success(client, url).await?;
    response
        .text()
        .await
        .map_err(|e| ExtractError::network(url, e))
}

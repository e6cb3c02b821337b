//! HTTP client for the command endpoint.

use crate::config::LookupApiConfig;
use crate::envelope::ApiEnvelope;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Path of the command endpoint under the API root.
pub const COMMAND_PATH: &str = "/api/command";

const ERROR_BODY_PREVIEW_LEN: usize = 200;

/// Sends one command to the lookup API. Implementations make exactly one attempt.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// `command` is the token plus arguments, e.g. `num 9876543210`.
    async fn call(&self, command: &str) -> Result<ApiEnvelope>;
}

/// Masks a secret for logging: first 7 chars + `***` + last 4. Keys of 11 chars or fewer become `***`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

#[derive(Debug, Serialize)]
struct CommandRequest<'a> {
    api_key: &'a str,
    command: &'a str,
}

/// reqwest-based [`LookupClient`].
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpLookupClient {
    /// Creates a client for `api_root` (trailing `/` ignored) with the given per-request timeout.
    pub fn new(api_root: &str, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        let endpoint = format!("{}{}", api_root.trim_end_matches('/'), COMMAND_PATH);
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Creates a client from config (root, key, timeout).
    pub fn from_config(config: &dyn LookupApiConfig) -> Result<Self> {
        Self::new(config.api_root(), config.api_key().to_string(), config.timeout())
    }

    /// Full URL commands are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    #[instrument(skip(self))]
    async fn call(&self, command: &str) -> Result<ApiEnvelope> {
        info!(
            endpoint = %self.endpoint,
            api_key = %mask_token(&self.api_key),
            "step: lookup API request"
        );
        let started = Instant::now();

        let request = CommandRequest {
            api_key: &self.api_key,
            command,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("Lookup API request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW_LEN).collect();
            warn!(status = %status, body_preview = %preview, "Lookup API returned error status");
            anyhow::bail!("Lookup API error ({}): {}", status, preview);
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .context("Malformed lookup API response")?;

        info!(
            status = %status,
            success = envelope.success,
            responses = envelope.responses.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "step: lookup API response"
        );
        Ok(envelope)
    }
}

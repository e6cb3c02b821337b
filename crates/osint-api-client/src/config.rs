//! Lookup API configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Relay the bot was built against.
pub const DEFAULT_API_ROOT: &str = "https://relay-wzlz.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Lookup API configuration interface.
pub trait LookupApiConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn api_root(&self) -> &str;
    fn timeout(&self) -> Duration;
    /// Prepended to the command token (e.g. `2/` selects the relay's v2 routes).
    fn command_prefix(&self) -> &str;
}

/// Lookup API config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLookupApiConfig {
    pub osint_api_key: String,
    pub osint_api_root: String,
    pub osint_api_timeout_secs: u64,
    pub osint_command_prefix: String,
}

impl LookupApiConfig for EnvLookupApiConfig {
    fn api_key(&self) -> &str {
        &self.osint_api_key
    }
    fn api_root(&self) -> &str {
        &self.osint_api_root
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.osint_api_timeout_secs)
    }
    fn command_prefix(&self) -> &str {
        &self.osint_command_prefix
    }
}

impl EnvLookupApiConfig {
    /// Load from environment variables. OSINT_API_KEY is required.
    pub fn from_env() -> Result<Self> {
        let osint_api_key = env::var("OSINT_API_KEY").context("OSINT_API_KEY not set")?;
        let osint_api_root =
            env::var("OSINT_API_ROOT").unwrap_or_else(|_| DEFAULT_API_ROOT.to_string());
        let osint_api_timeout_secs = match env::var("OSINT_API_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("OSINT_API_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let osint_command_prefix = env::var("OSINT_COMMAND_PREFIX").unwrap_or_default();
        Ok(Self {
            osint_api_key,
            osint_api_root,
            osint_api_timeout_secs,
            osint_command_prefix,
        })
    }

    /// Validate: key non-empty, root an http(s) URL, timeout positive.
    pub fn validate(&self) -> Result<()> {
        if self.osint_api_key.trim().is_empty() {
            anyhow::bail!("OSINT_API_KEY is empty");
        }
        let url = reqwest::Url::parse(&self.osint_api_root)
            .with_context(|| format!("OSINT_API_ROOT is not a valid URL: {}", self.osint_api_root))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("OSINT_API_ROOT must be http or https: {}", self.osint_api_root);
        }
        if self.osint_api_timeout_secs == 0 {
            anyhow::bail!("OSINT_API_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

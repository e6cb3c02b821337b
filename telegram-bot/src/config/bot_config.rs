//! BotConfig: everything the framework needs before any handler runs. Use load() for env-based loading.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/osint-bot.log";
pub const DEFAULT_HEALTH_PORT: u16 = 10000;
const DEFAULT_HEALTH_BIND_ADDR: &str = "0.0.0.0";

/// Framework config. Handler-specific settings live in their own crates.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL; points the bot at a mock server in tests.
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// PORT; the hosting platform probes `GET /` on it.
    pub health_port: u16,
    /// HEALTH_BIND_ADDR
    pub health_bind_addr: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to fail fast before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let health_port = match env::var("PORT") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", s))?,
            Err(_) => DEFAULT_HEALTH_PORT,
        };
        let health_bind_addr = env::var("HEALTH_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_HEALTH_BIND_ADDR.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            health_port,
            health_bind_addr,
        })
    }

    /// Validate config: token must be non-empty, telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
    /// `host:port` the health server binds to.
    pub fn health_addr(&self) -> String {
        format!("{}:{}", self.health_bind_addr, self.health_port)
    }
}

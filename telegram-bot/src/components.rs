//! Component factory: builds BotComponents from config. Isolates assembly logic from the runner.

use crate::core::Bot as CoreBot;
use crate::telegram::TelegramBotAdapter;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::BotConfig;

/// Shared dependencies handed to the application's handler factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Filled by the runner (get_me) before polling starts.
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    /// Bot used by handlers to send and edit; the Telegram adapter unless overridden in tests.
    pub handler_bot: Arc<dyn CoreBot>,
}

/// Builds the teloxide bot (honouring TELEGRAM_API_URL) and the handler-facing Bot.
#[instrument(skip(config, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn CoreBot>>,
) -> Result<BotComponents> {
    let mut teloxide_bot = teloxide::Bot::new(config.bot_token());
    if let Some(url_str) = config.telegram_api_url() {
        let url = reqwest::Url::parse(url_str)
            .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
        info!(url = %url, "Using custom Telegram API URL");
        teloxide_bot = teloxide_bot.set_api_url(url);
    }

    let handler_bot = handler_bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));

    Ok(BotComponents {
        teloxide_bot,
        bot_username: Arc::new(tokio::sync::RwLock::new(None)),
        handler_bot,
    })
}

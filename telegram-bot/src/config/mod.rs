//! Bot configuration: Telegram connectivity, logging and the health endpoint. Loaded from env.

mod bot_config;


pub use bot_config::{BotConfig, DEFAULT_HEALTH_PORT, DEFAULT_LOG_FILE};

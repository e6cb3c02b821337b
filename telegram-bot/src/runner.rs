//! Entry points: run the bot (health server + polling) or build the chain only for tests.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, BotComponents};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, Handler};
use crate::handlers::LoggingHandler;
use crate::health::{bind_health_listener, spawn_health_server};
use crate::telegram::{register_commands, run_repl};

/// Builds the chain: [`LoggingHandler`] first, then the application's handlers in order.
pub fn build_handler_chain(handlers: Vec<Arc<dyn Handler>>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new()))
        .add_handlers(handlers)
}

/// Main entry: validate config, init logging, build components, create handlers via the factory,
/// bind and spawn the health server, register the command menu, then run the REPL until shutdown.
///
/// `command_menu` is a list of `(command, description)` pairs shown in Telegram clients.
#[instrument(skip_all)]
pub async fn run_bot<F>(config: BotConfig, command_menu: &[(&str, &str)], make_handlers: F) -> Result<()>
where
    F: FnOnce(&BotConfig, BotComponents) -> Result<Vec<Arc<dyn Handler>>>,
{
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        health_addr = %config.health_addr(),
        custom_api_url = config.telegram_api_url().is_some(),
        "Initializing bot"
    );

    let components = build_bot_components(&config, None)?;
    let handlers = make_handlers(&config, components.clone())?;
    let handler_chain = build_handler_chain(handlers);

    let listener = bind_health_listener(&config.health_addr()).await?;
    let health_task = spawn_health_server(listener);

    register_commands(&components.teloxide_bot, command_menu).await;

    info!(handlers = handler_chain.len(), "Bot started successfully");
    let result = run_repl(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
    )
    .await;

    health_task.abort();
    info!("Bot stopped");
    result
}

/// Builds components and the handler chain without tracing, health server or REPL.
/// Integration tests inject a mock bot via `handler_bot_override` and drive the chain with fake messages.
pub fn build_only<F>(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn Bot>>,
    make_handlers: F,
) -> Result<(BotComponents, HandlerChain)>
where
    F: FnOnce(&BotConfig, BotComponents) -> Result<Vec<Arc<dyn Handler>>>,
{
    config.validate()?;
    let components = build_bot_components(config, handler_bot_override)?;
    let handlers = make_handlers(config, components.clone())?;
    Ok((components, build_handler_chain(handlers)))
}

//! Assembly: builds the lookup client and handlers, then hands them to the framework runner.

use anyhow::Result;
use osint_api_client::{EnvLookupApiConfig, HttpLookupClient, LookupApiConfig, LookupClient};
use std::sync::Arc;
use telegram_bot::{run_bot, BotComponents, BotConfig, Handler};
use tracing::info;

use crate::commands::LookupCommand;
use crate::handlers::{LookupHandler, StartHandler};

/// Command menu registered with Telegram: the six lookups plus `start`.
pub fn command_menu() -> Vec<(&'static str, &'static str)> {
    let mut menu: Vec<(&'static str, &'static str)> = LookupCommand::ALL
        .into_iter()
        .map(|c| (c.as_str(), c.description()))
        .collect();
    menu.push(("start", "Show available commands"));
    menu
}

/// Builds the application's handlers in chain order. `client` overrides the HTTP client (tests).
pub fn build_handlers(
    api_config: &dyn LookupApiConfig,
    components: BotComponents,
    client: Option<Arc<dyn LookupClient>>,
) -> Result<Vec<Arc<dyn Handler>>> {
    let client = match client {
        Some(client) => client,
        None => {
            let http = HttpLookupClient::from_config(api_config)?;
            info!(
                endpoint = %http.endpoint(),
                timeout_secs = api_config.timeout().as_secs(),
                command_prefix = %api_config.command_prefix(),
                "Lookup client ready"
            );
            Arc::new(http)
        }
    };

    let handlers: Vec<Arc<dyn Handler>> = vec![
        Arc::new(StartHandler::new(
            components.handler_bot.clone(),
            components.bot_username.clone(),
        )),
        Arc::new(LookupHandler::new(
            client,
            components.handler_bot.clone(),
            components.bot_username.clone(),
            api_config.command_prefix().to_string(),
        )),
    ];
    Ok(handlers)
}

/// Loads the lookup API config from the environment and runs the bot until shutdown.
pub async fn run(config: BotConfig) -> Result<()> {
    let api_config = EnvLookupApiConfig::from_env()?;
    api_config.validate()?;

    let menu = command_menu();
    run_bot(config, &menu, move |_, components| {
        build_handlers(&api_config, components, None)
    })
    .await
}

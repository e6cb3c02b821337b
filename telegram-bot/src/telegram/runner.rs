//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::BotCommand};
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Registers the command menu shown by Telegram clients. Failure is logged, not returned: the bot works without a menu.
#[instrument(skip(bot, commands), fields(count = commands.len()))]
pub async fn register_commands(bot: &teloxide::Bot, commands: &[(&str, &str)]) {
    let menu: Vec<BotCommand> = commands
        .iter()
        .map(|(name, description)| BotCommand::new(*name, *description))
        .collect();
    match bot.set_my_commands(menu).await {
        Ok(_) => info!("Bot command menu registered"),
        Err(e) => warn!(error = %e, "Failed to register bot command menu"),
    }
}

/// Starts the REPL with the given teloxide Bot, HandlerChain, and bot_username cache.
///
/// Calls get_me() first and writes the username into `bot_username` so handlers can match
/// `/cmd@BotUsername`. Each text message is converted to core::Message and handled in its own task,
/// so one slow command never blocks other chats.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; /cmd@BotUsername forms will be ignored"),
    }

    info!("step: polling started");
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if !core_msg.has_text() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message, ignored"
                );
                return respond(());
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}

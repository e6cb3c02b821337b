//! `/start` and `/help`: replies with the usage text.

use async_trait::async_trait;
use std::sync::Arc;
use telegram_bot::{parse_command, Bot, Handler, HandlerResponse, Message, Result};
use tokio::sync::RwLock;

use crate::commands::help_text;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(cmd) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        if !matches!(cmd.name.as_str(), "start" | "help") {
            return Ok(HandlerResponse::Continue);
        }
        if !cmd.is_addressed_to(self.bot_username.read().await.as_deref()) {
            return Ok(HandlerResponse::Ignore);
        }

        let text = help_text();
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

//! Logs each inbound message in before() and the outcome in after(); always continues.

use crate::core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::{info, instrument};

/// First handler in every chain built by [`crate::run_bot`].
#[derive(Debug, Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let (outcome, reply_len) = match response {
            HandlerResponse::Continue => ("continue", None),
            HandlerResponse::Stop => ("stop", None),
            HandlerResponse::Ignore => ("ignore", None),
            HandlerResponse::Reply(text) => ("reply", Some(text.chars().count())),
        };
        info!(
            user_id = message.user.id,
            message_id = %message.id,
            outcome = outcome,
            reply_len = ?reply_len,
            "Processed message"
        );
        Ok(())
    }
}

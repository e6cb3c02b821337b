//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide
//! and tests substitute a recording mock.

use super::error::{DbotError, Result};
use super::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending and editing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a message and returns its id for a later [`Bot::edit_message`].
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Replaces the text of an already-sent message. `message_id` is transport-specific (Telegram numeric string).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Like [`Bot::edit_message`], but `html` is sent with HTML parse mode.
    async fn edit_message_html(&self, chat: &Chat, message_id: &str, html: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit_message.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for edit: {}", s)))
}

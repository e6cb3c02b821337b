//! Mock implementation of [`telegram_bot::Bot`] for integration tests.
//!
//! Records every send, reply and edit so tests can assert on what the chat would have shown
//! without hitting Telegram.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use telegram_bot::{Bot, Chat, DbotError, Message, Result};

/// One recorded call on the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    Send { chat_id: i64, text: String },
    Reply { message_id: String, text: String },
    Placeholder { chat_id: i64, text: String },
    Edit { message_id: String, text: String },
    EditHtml { message_id: String, html: String },
}

/// Mock Bot that records calls and returns a fixed placeholder message id (`"1"`).
pub struct MockBot {
    placeholder_id: String,
    fail_placeholder: bool,
    fail_html_edit: bool,
    calls: Mutex<Vec<BotCall>>,
}

impl MockBot {
    fn build(fail_placeholder: bool, fail_html_edit: bool) -> Arc<Self> {
        Arc::new(Self {
            placeholder_id: "1".to_string(),
            fail_placeholder,
            fail_html_edit,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn new() -> Arc<Self> {
        Self::build(false, false)
    }

    /// A bot whose `send_message_and_return_id` always fails.
    pub fn failing_placeholder() -> Arc<Self> {
        Self::build(true, false)
    }

    /// A bot whose `edit_message_html` always fails, like Telegram rejecting an oversized text.
    pub fn rejecting_html_edits() -> Arc<Self> {
        Self::build(false, true)
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BotCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(BotCall::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(BotCall::Reply {
            message_id: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        if self.fail_placeholder {
            return Err(DbotError::Bot("chat not found".to_string()));
        }
        self.record(BotCall::Placeholder {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(self.placeholder_id.clone())
    }

    async fn edit_message(&self, _chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.record(BotCall::Edit {
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn edit_message_html(&self, _chat: &Chat, message_id: &str, html: &str) -> Result<()> {
        if self.fail_html_edit {
            return Err(DbotError::Bot("Bad Request: MESSAGE_TOO_LONG".to_string()));
        }
        self.record(BotCall::EditHtml {
            message_id: message_id.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

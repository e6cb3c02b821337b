#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use telegram_bot::{Chat, Message, User};

/// Builds an inbound private-chat text message.
pub fn create_test_message(content: &str) -> Message {
    Message {
        id: "10".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("analyst".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}

//! Conversions from teloxide types to core types.

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Converts a teloxide user into a core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Converts a teloxide message into a core [`Message`]. Messages without a sender (channel posts) get user id 0.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: chat_type_name(&msg.chat).to_string(),
            },
            content: msg.text().unwrap_or_default().to_string(),
            created_at: msg.date,
            reply_to_message_id: msg.reply_to_message().map(|m| m.id.to_string()),
        }
    }
}

fn chat_type_name(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tg_user(id: u64, username: Option<&str>, last_name: Option<&str>) -> teloxide::types::User {
        teloxide::types::User {
            id: teloxide::types::UserId(id),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: last_name.map(str::to_string),
            username: username.map(str::to_string),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = tg_user(123, Some("analyst"), Some("User"));
        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username.as_deref(), Some("analyst"));
        assert_eq!(core_user.first_name.as_deref(), Some("Test"));
        assert_eq!(core_user.last_name.as_deref(), Some("User"));
    }

    #[test]
    fn test_telegram_user_wrapper_minimal() {
        let user = tg_user(456, None, None);
        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 456);
        assert!(core_user.username.is_none());
        assert!(core_user.last_name.is_none());
    }
}

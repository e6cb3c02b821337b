//! Lookup handler: one parametrised pipeline for every [`LookupCommand`].
//!
//! Per message: no arguments → missing-argument reply, no API call. Otherwise a placeholder is
//! sent, the API is called once, and the placeholder is edited to the API error, the no-data
//! notice, or the formatted result inside a `<pre>` block. Nothing is retried.

use async_trait::async_trait;
use osint_api_client::{ApiEnvelope, LookupClient};
use response_format::{format_response, format_value, render_lines};
use serde_json::Value;
use std::sync::Arc;
use telegram_bot::{parse_command, Bot, Handler, HandlerResponse, Message, Result};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::commands::LookupCommand;

// --- User-facing texts ---
pub const MSG_MISSING_ARGUMENT: &str = "❌ Missing argument";
pub const MSG_PROCESSING: &str = "🔍 Processing...";
pub const MSG_API_ERROR: &str = "❌ API Error";
pub const MSG_NO_DATA: &str = "❌ No data found";

/// Final text the placeholder is edited to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// One of the fixed notices, sent as plain text.
    Notice(&'static str),
    /// Rendered API data, already truncated; sent inside a preformatted block.
    Data(String),
}

impl LookupOutcome {
    /// Maps the API call result to what the user sees. Error details never reach the chat.
    pub fn from_result(result: &anyhow::Result<ApiEnvelope>) -> Self {
        match result {
            Err(_) => LookupOutcome::Notice(MSG_API_ERROR),
            Ok(envelope) if !envelope.success => LookupOutcome::Notice(MSG_NO_DATA),
            Ok(envelope) => {
                let text = render_envelope(envelope);
                if text.trim().is_empty() {
                    LookupOutcome::Notice(MSG_NO_DATA)
                } else {
                    LookupOutcome::Data(text)
                }
            }
        }
    }

    /// Unformatted text of the outcome.
    pub fn text(&self) -> &str {
        match self {
            LookupOutcome::Notice(text) => text,
            LookupOutcome::Data(text) => text,
        }
    }
}

/// Formats every response of the envelope in order and joins them into one truncated text.
pub fn render_envelope(envelope: &ApiEnvelope) -> String {
    let lines: Vec<String> = envelope
        .responses
        .iter()
        .flat_map(|response| match response {
            Value::String(raw) => format_response(raw),
            other => format_value(other, 0),
        })
        .collect();
    render_lines(&lines)
}

/// Command string sent to the API: `<prefix><token> <args>`.
pub fn build_command(prefix: &str, command: LookupCommand, args: &str) -> String {
    format!("{}{} {}", prefix, command, args)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Runs lookups for the six commands. Messages that are not lookup commands pass through.
pub struct LookupHandler {
    client: Arc<dyn LookupClient>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
    command_prefix: String,
}

impl LookupHandler {
    pub fn new(
        client: Arc<dyn LookupClient>,
        bot: Arc<dyn Bot>,
        bot_username: Arc<RwLock<Option<String>>>,
        command_prefix: String,
    ) -> Self {
        Self {
            client,
            bot,
            bot_username,
            command_prefix,
        }
    }

    /// Placeholder → API call → edit. Returns the text the placeholder ended with.
    ///
    /// If Telegram rejects the formatted result (e.g. too long in UTF-16 units), the placeholder is
    /// edited to the API error notice instead of being left as is.
    #[instrument(skip(self, message, args), fields(chat_id = message.chat.id, command = %command))]
    async fn lookup(
        &self,
        message: &Message,
        command: LookupCommand,
        args: &str,
    ) -> Result<LookupOutcome> {
        let placeholder_id = self
            .bot
            .send_message_and_return_id(&message.chat, MSG_PROCESSING)
            .await?;

        let request = build_command(&self.command_prefix, command, args);
        let result = self.client.call(&request).await;
        if let Err(e) = &result {
            for (i, cause) in e.chain().enumerate() {
                if i == 0 {
                    error!(cause = %cause, "Lookup API call failed");
                } else {
                    error!(cause = %cause, "Caused by");
                }
            }
        }

        let mut outcome = LookupOutcome::from_result(&result);
        let rejected = match &outcome {
            LookupOutcome::Data(text) => {
                let html = format!("<pre>{}</pre>", escape_html(text));
                match self
                    .bot
                    .edit_message_html(&message.chat, &placeholder_id, &html)
                    .await
                {
                    Ok(()) => false,
                    Err(e) => {
                        warn!(error = %e, html_len = html.len(), "Formatted edit rejected");
                        true
                    }
                }
            }
            LookupOutcome::Notice(_) => false,
        };
        if rejected {
            outcome = LookupOutcome::Notice(MSG_API_ERROR);
        }
        if let LookupOutcome::Notice(text) = &outcome {
            self.bot
                .edit_message(&message.chat, &placeholder_id, text)
                .await?;
        }
        info!(
            data = matches!(outcome, LookupOutcome::Data(_)),
            reply_len = outcome.text().chars().count(),
            "step: lookup finished"
        );
        Ok(outcome)
    }
}

#[async_trait]
impl Handler for LookupHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(cmd) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        let Ok(command) = cmd.name.parse::<LookupCommand>() else {
            return Ok(HandlerResponse::Continue);
        };
        if !cmd.is_addressed_to(self.bot_username.read().await.as_deref()) {
            debug!(target_bot = ?cmd.target, "Lookup addressed to another bot, ignored");
            return Ok(HandlerResponse::Ignore);
        }

        if cmd.args.is_empty() {
            info!(command = %command, user_id = message.user.id, "Lookup without argument");
            self.bot.reply_to(message, MSG_MISSING_ARGUMENT).await?;
            return Ok(HandlerResponse::Reply(MSG_MISSING_ARGUMENT.to_string()));
        }

        let outcome = self.lookup(message, command, &cmd.joined_args()).await?;
        Ok(HandlerResponse::Reply(outcome.text().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command() {
        assert_eq!(
            build_command("", LookupCommand::Num, "9876543210 extra"),
            "num 9876543210 extra"
        );
        assert_eq!(build_command("2/", LookupCommand::Ip, "8.8.8.8"), "2/ip 8.8.8.8");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b> & c"), "a&lt;b&gt; &amp; c");
    }

    #[test]
    fn test_outcome_for_error_is_generic() {
        let result: anyhow::Result<ApiEnvelope> =
            Err(anyhow::anyhow!("connection refused: secret details"));
        let outcome = LookupOutcome::from_result(&result);
        assert_eq!(outcome, LookupOutcome::Notice(MSG_API_ERROR));
        assert_eq!(outcome.text(), "❌ API Error");
    }

    #[test]
    fn test_outcome_for_unsuccessful_envelope() {
        let outcome = LookupOutcome::from_result(&Ok(ApiEnvelope::no_data()));
        assert_eq!(outcome, LookupOutcome::Notice(MSG_NO_DATA));
    }

    #[test]
    fn test_outcome_for_successful_envelope_without_content() {
        let outcome = LookupOutcome::from_result(&Ok(ApiEnvelope::ok(Vec::<String>::new())));
        assert_eq!(outcome, LookupOutcome::Notice(MSG_NO_DATA));
    }

    #[test]
    fn test_render_envelope_concatenates_responses() {
        let mut envelope = ApiEnvelope::ok(["```json\n{\"name\": \"A\"}\n```", "plain note"]);
        envelope.responses.push(serde_json::json!({"circle": "MH"}));
        assert_eq!(render_envelope(&envelope), "• Name: A\nplain note\n• Circle: MH");
    }
}

//! Slash-command parsing for inbound text.
//!
//! Telegram delivers commands as plain text: `/name arg1 arg2` in private chats and
//! `/name@BotUsername arg1` in groups. Handlers use [`parse_command`] and
//! [`SlashCommand::is_addressed_to`] to decide whether a message is theirs.

/// A parsed slash command. `name` is lower-cased; `args` are the whitespace-separated words after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommand {
    pub name: String,
    /// Bot username from the `/name@BotUsername` form, without the `@`.
    pub target: Option<String>,
    pub args: Vec<String>,
}

impl SlashCommand {
    /// True when the command has no `@target`, or the target matches `bot_username` (case-insensitive).
    /// An explicit target is rejected while the bot username is still unknown.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (&self.target, bot_username) {
            (None, _) => true,
            (Some(target), Some(username)) => target.eq_ignore_ascii_case(username),
            (Some(_), None) => false,
        }
    }

    /// Arguments joined with single spaces.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}

/// Parses `text` as a slash command. Returns None when the text does not start with `/` or the name is empty.
pub fn parse_command(text: &str) -> Option<SlashCommand> {
    let mut words = text.split_whitespace();
    let head = words.next()?.strip_prefix('/')?;

    let (name, target) = match head.split_once('@') {
        Some((name, target)) => (name, Some(target.to_string()).filter(|t| !t.is_empty())),
        None => (head, None),
    };
    if name.is_empty() {
        return None;
    }

    Some(SlashCommand {
        name: name.to_lowercase(),
        target,
        args: words.map(str::to_string).collect(),
    })
}

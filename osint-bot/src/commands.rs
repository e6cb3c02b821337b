//! The fixed lookup vocabulary. Adding a command means adding a variant here.

use std::fmt;
use std::str::FromStr;

use telegram_bot::HandlerError;

/// One lookup category understood by the relay API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupCommand {
    Num,
    Ip,
    Insta,
    Tg,
    Gst,
    Ff,
}

impl LookupCommand {
    pub const ALL: [LookupCommand; 6] = [
        LookupCommand::Num,
        LookupCommand::Ip,
        LookupCommand::Insta,
        LookupCommand::Tg,
        LookupCommand::Gst,
        LookupCommand::Ff,
    ];

    /// Token sent to the API and used as the slash-command name.
    pub fn as_str(self) -> &'static str {
        match self {
            LookupCommand::Num => "num",
            LookupCommand::Ip => "ip",
            LookupCommand::Insta => "insta",
            LookupCommand::Tg => "tg",
            LookupCommand::Gst => "gst",
            LookupCommand::Ff => "ff",
        }
    }

    /// Placeholder shown in the usage text, e.g. `<number>`.
    pub fn argument_hint(self) -> &'static str {
        match self {
            LookupCommand::Num => "<number>",
            LookupCommand::Ip => "<ip>",
            LookupCommand::Insta | LookupCommand::Tg => "<username>",
            LookupCommand::Gst => "<gst>",
            LookupCommand::Ff => "<id>",
        }
    }

    /// Description for the Telegram command menu.
    pub fn description(self) -> &'static str {
        match self {
            LookupCommand::Num => "Look up a phone number",
            LookupCommand::Ip => "Look up an IP address",
            LookupCommand::Insta => "Look up an Instagram username",
            LookupCommand::Tg => "Look up a Telegram username",
            LookupCommand::Gst => "Look up a GST number",
            LookupCommand::Ff => "Look up a Free Fire player id",
        }
    }
}

impl fmt::Display for LookupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupCommand {
    type Err = HandlerError;

    /// Case-insensitive; accepts an optional leading `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix('/').unwrap_or(s);
        LookupCommand::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| HandlerError::InvalidCommand(s.to_string()))
    }
}

/// Usage text for `/start` and `/help`.
pub fn help_text() -> String {
    let mut text = String::from("🕵️ OSINT Bot Online\n");
    for cmd in LookupCommand::ALL {
        text.push_str(&format!("\n/{} {}", cmd, cmd.argument_hint()));
    }
    text
}

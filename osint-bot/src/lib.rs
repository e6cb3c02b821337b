//! # osint_bot
//!
//! Telegram bot that forwards `/num`, `/ip`, `/insta`, `/tg`, `/gst` and `/ff` lookups to the
//! relay's command API and edits the reply into a readable, indented block.
//!
//! **Public API:** [`run`] (used by the binary), [`build_handlers`] (used by tests to drive the
//! chain with a mock bot), the [`LookupCommand`] table and the handlers.

mod assembly;
pub mod commands;
pub mod handlers;

pub use assembly::{build_handlers, command_menu, run};
pub use commands::{help_text, LookupCommand};
pub use handlers::{LookupHandler, LookupOutcome, StartHandler};

//! # Telegram bot framework
//!
//! Core (Handler, Bot, Message), chain (HandlerChain), telegram (teloxide adapters and REPL),
//! config, health endpoint and the [`run_bot`] entry point. Applications plug their handlers in
//! through the factory passed to [`run_bot`].

pub mod chain;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod health;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, parse_message_id, Bot, Chat, DbotError, Handler, HandlerError, HandlerResponse,
    Message, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use command::{parse_command, SlashCommand};

pub use telegram::{
    register_commands, run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};

pub use components::{build_bot_components, BotComponents};
pub use config::BotConfig;
pub use handlers::LoggingHandler;
pub use health::{bind_health_listener, health_router, spawn_health_server};
pub use runner::{build_handler_chain, build_only, run_bot};

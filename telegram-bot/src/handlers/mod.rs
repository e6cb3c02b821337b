//! Framework-level handlers.

mod logging_handler;

pub use logging_handler::LoggingHandler;

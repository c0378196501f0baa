//! Command handling module.
//!
//! Parses chat commands and dispatches them to the BIN lookup pipeline,
//! the fake data generators, or static replies.

mod handler;
mod types;

pub use handler::{
    BIN_NOT_FOUND_TEXT, BIN_UNAVAILABLE_TEXT, CommandDispatcher, PONG_TEXT, SHUTDOWN_TEXT,
    UNAUTHORIZED_TEXT, format_record,
};
pub use types::{BotCommand, CallerId, CommandResult};

//! Configuration module for the bot.
//!
//! Owner identity, bot behaviour, and lookup source settings, each read
//! once at startup and passed explicitly to the components that need them.

mod settings;

pub use settings::{BotSettings, ConfigError, LookupSettings, OwnerConfig};

//! Owner identity and application settings.

use serde::{Deserialize, Serialize};

/// Identity of the bot owner and the transport access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerConfig {
    /// Caller identifier allowed to use admin commands.
    #[serde(default = "default_owner_id")]
    pub owner_id: String,

    /// Display name shown in credits and the admin menu.
    #[serde(default = "default_owner_username")]
    pub owner_username: String,

    /// Access token for the messaging transport, if one is attached.
    #[serde(default, skip_serializing)]
    pub bot_token: Option<String>,
}

fn default_owner_id() -> String {
    "123456789".to_owned()
}

fn default_owner_username() -> String {
    "BotOwner".to_owned()
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            owner_id: default_owner_id(),
            owner_username: default_owner_username(),
            bot_token: None,
        }
    }
}

impl OwnerConfig {
    /// Creates an owner configuration without a transport token.
    #[must_use]
    pub fn new(owner_id: impl Into<String>, owner_username: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            owner_username: owner_username.into(),
            bot_token: None,
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads `OWNER_ID`, `OWNER_USERNAME`, and `BOT_TOKEN`; the first two
    /// fall back to defaults when unset, the token is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if `OWNER_ID` is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let owner_id = match std::env::var("OWNER_ID") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::EmptyValue("OWNER_ID"));
            }
            Ok(value) => value.trim().to_owned(),
            Err(_) => default_owner_id(),
        };

        let owner_username =
            std::env::var("OWNER_USERNAME").unwrap_or_else(|_| default_owner_username());

        let bot_token = std::env::var("BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(Self {
            owner_id,
            owner_username,
            bot_token,
        })
    }

    /// Checks whether `caller` is the configured owner.
    #[must_use]
    pub fn is_owner(&self, caller: &str) -> bool {
        self.owner_id == caller
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Prefix that marks a chat line as a command.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Seconds between liveness log lines.
    #[serde(default = "default_heartbeat_interval")]
    pub heartbeat_interval_secs: u64,

    /// Number of addresses produced by `ipgen`.
    #[serde(default = "default_ipgen_count")]
    pub ipgen_count: usize,

    /// Log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_command_prefix() -> String {
    "/".to_owned()
}

fn default_heartbeat_interval() -> u64 {
    60
}

fn default_ipgen_count() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            heartbeat_interval_secs: default_heartbeat_interval(),
            ipgen_count: default_ipgen_count(),
            log_level: default_log_level(),
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self {
            command_prefix: std::env::var("COMMAND_PREFIX")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(default_command_prefix),
            heartbeat_interval_secs: std::env::var("HEARTBEAT_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or_else(default_heartbeat_interval),
            ipgen_count: std::env::var("IPGEN_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_ipgen_count),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level()),
        }
    }
}

/// Settings for the BIN lookup source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupSettings {
    /// URL the search form is posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// `User-Agent` header sent with each lookup.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "http://bins.su/".to_owned()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_owned()
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupSettings {
    /// Creates lookup settings from environment variables with defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self {
            endpoint: std::env::var("BIN_LOOKUP_URL").unwrap_or_else(|_| default_endpoint()),
            user_agent: std::env::var("BIN_LOOKUP_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is set but empty")]
    EmptyValue(&'static str),
}

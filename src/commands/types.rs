//! Command types and definitions.

use std::fmt;

/// Identity of whoever sent a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CallerId(String);

impl CallerId {
    /// Creates a caller identity from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CallerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CallerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for CallerId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for CallerId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Available bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Show the welcome message.
    Start,

    /// Show help information.
    Help,

    /// Show who runs the bot.
    Credits,

    /// Check that the bot answers.
    Ping,

    /// Generate random IP addresses.
    IpGen,

    /// Generate a fake identity.
    Faker,

    /// Look up a BIN. Holds the first parameter, if any.
    Bin(Option<String>),

    /// Show the admin menu (owner only).
    Admin,

    /// Stop the bot (owner only).
    Shutdown,

    /// Show bot status (owner only).
    Status,

    /// Anything else. Holds the token as received.
    Unknown(String),
}

impl BotCommand {
    /// Maps a command token and its parameters to a command.
    ///
    /// The token must start with `prefix`; the name after it is matched
    /// case-insensitively. Anything unmatched becomes [`BotCommand::Unknown`].
    #[must_use]
    pub fn from_token(token: &str, prefix: &str, params: Option<&[String]>) -> Self {
        let Some(name) = token.trim().strip_prefix(prefix) else {
            return Self::Unknown(token.to_owned());
        };

        match name.to_lowercase().as_str() {
            "start" => Self::Start,
            "help" => Self::Help,
            "credits" => Self::Credits,
            "ping" => Self::Ping,
            "ipgen" => Self::IpGen,
            "faker" => Self::Faker,
            "bin" => Self::Bin(params.and_then(|p| p.first()).cloned()),
            "admin" => Self::Admin,
            "shutdown" => Self::Shutdown,
            "status" => Self::Status,
            _ => Self::Unknown(token.to_owned()),
        }
    }

    /// Splits a chat line into a command token and its parameters.
    ///
    /// Returns `None` if the line does not start with `prefix`.
    #[must_use]
    pub fn split_message(text: &str, prefix: &str) -> Option<(String, Vec<String>)> {
        let text = text.trim();

        if prefix.is_empty() || !text.starts_with(prefix) {
            return None;
        }

        let mut parts = text.split_whitespace();
        let token = parts.next()?.to_owned();
        let params = parts.map(str::to_owned).collect();

        Some((token, params))
    }

    /// Whether only the owner may run this command.
    #[must_use]
    pub const fn is_owner_only(&self) -> bool {
        matches!(self, Self::Admin | Self::Shutdown | Self::Status)
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Credits => "credits",
            Self::Ping => "ping",
            Self::IpGen => "ipgen",
            Self::Faker => "faker",
            Self::Bin(_) => "bin",
            Self::Admin => "admin",
            Self::Shutdown => "shutdown",
            Self::Status => "status",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Returns all available commands with their usage and descriptions.
    #[must_use]
    pub fn all_commands() -> Vec<(&'static str, &'static str)> {
        vec![
            ("start", "Welcome message"),
            ("ping", "Check if the bot is online"),
            ("ipgen", "Generate fake IP addresses"),
            ("faker", "Generate fake details"),
            ("bin <digits>", "Get details from BIN (e.g. bin 457179)"),
            ("credits", "Show bot and owner information"),
            ("admin", "Admin-only commands (owner)"),
            ("shutdown", "Shut down the bot (admin only)"),
            ("status", "Check bot status (admin only)"),
            ("help", "Show this help message"),
        ]
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bin(Some(param)) => write!(f, "bin {param}"),
            Self::Unknown(token) => write!(f, "unknown '{token}'"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Result of command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command was successful.
    pub success: bool,

    /// Response message to show the user.
    pub message: String,

    /// Whether the front-end should stop after replying.
    pub shutdown_requested: bool,
}

impl CommandResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            shutdown_requested: false,
        }
    }

    /// Creates a successful result that asks the front-end to stop.
    #[must_use]
    pub fn shutdown(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            shutdown_requested: true,
        }
    }

    /// Creates an error result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            shutdown_requested: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "/";

    fn params(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_parse_simple_tokens() {
        assert_eq!(BotCommand::from_token("/start", PREFIX, None), BotCommand::Start);
        assert_eq!(BotCommand::from_token("/help", PREFIX, None), BotCommand::Help);
        assert_eq!(BotCommand::from_token("/ping", PREFIX, None), BotCommand::Ping);
        assert_eq!(BotCommand::from_token("/ipgen", PREFIX, None), BotCommand::IpGen);
        assert_eq!(BotCommand::from_token("/faker", PREFIX, None), BotCommand::Faker);
        assert_eq!(BotCommand::from_token("/status", PREFIX, None), BotCommand::Status);
    }

    #[test]
    fn test_parse_bin_takes_first_param() {
        let p = params(&["457179", "extra"]);
        assert_eq!(
            BotCommand::from_token("/bin", PREFIX, Some(p.as_slice())),
            BotCommand::Bin(Some("457179".to_owned()))
        );
        assert_eq!(BotCommand::from_token("/bin", PREFIX, None), BotCommand::Bin(None));
        let empty: Vec<String> = Vec::new();
        assert_eq!(
            BotCommand::from_token("/bin", PREFIX, Some(empty.as_slice())),
            BotCommand::Bin(None)
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(BotCommand::from_token("/PING", PREFIX, None), BotCommand::Ping);
        assert_eq!(BotCommand::from_token("/Admin", PREFIX, None), BotCommand::Admin);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            BotCommand::from_token("/xyz", PREFIX, None),
            BotCommand::Unknown("/xyz".to_owned())
        );
        assert_eq!(
            BotCommand::from_token("ping", PREFIX, None),
            BotCommand::Unknown("ping".to_owned())
        );
        assert_eq!(
            BotCommand::from_token("", PREFIX, None),
            BotCommand::Unknown(String::new())
        );
    }

    #[test]
    fn test_parse_custom_prefix() {
        assert_eq!(BotCommand::from_token("!ping", "!", None), BotCommand::Ping);
        assert_eq!(
            BotCommand::from_token("/ping", "!", None),
            BotCommand::Unknown("/ping".to_owned())
        );
    }

    #[test]
    fn test_split_message() {
        assert_eq!(
            BotCommand::split_message("  /bin   457179  x ", PREFIX),
            Some(("/bin".to_owned(), params(&["457179", "x"])))
        );
        assert_eq!(
            BotCommand::split_message("/ping", PREFIX),
            Some(("/ping".to_owned(), Vec::new()))
        );
        assert_eq!(BotCommand::split_message("hello there", PREFIX), None);
        assert_eq!(BotCommand::split_message("", PREFIX), None);
    }

    #[test]
    fn test_owner_only() {
        assert!(BotCommand::Admin.is_owner_only());
        assert!(BotCommand::Shutdown.is_owner_only());
        assert!(BotCommand::Status.is_owner_only());
        assert!(!BotCommand::Ping.is_owner_only());
        assert!(!BotCommand::Bin(None).is_owner_only());
    }

    #[test]
    fn test_caller_id_conversions() {
        assert_eq!(CallerId::from(123_456_789_i64).as_str(), "123456789");
        assert_eq!(CallerId::from(42_u64), CallerId::from("42"));
        assert_eq!(CallerId::default().as_str(), "");
    }
}

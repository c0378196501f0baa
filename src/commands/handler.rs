//! Command dispatcher implementation.

use tracing::{debug, info, warn};

use super::types::{BotCommand, CallerId, CommandResult};
use crate::config::{BotSettings, OwnerConfig};
use crate::heartbeat::Uptime;
use crate::lookup::{BinRecord, BinSource, LookupError, lookup_bin};
use crate::synth::{RandomSynthesizer, Synthesizer};

pub const PONG_TEXT: &str = "🏓 Pong! The bot is online and ready!";
pub const UNAUTHORIZED_TEXT: &str = "🚫 You are not authorized to use admin commands.";
pub const SHUTDOWN_TEXT: &str = "⚠️ Bot is shutting down...";
pub const BIN_NOT_FOUND_TEXT: &str = "⚠️ BIN details not found.";
pub const BIN_UNAVAILABLE_TEXT: &str =
    "⚠️ BIN lookup is unavailable right now. Please try again later.";

/// Maps commands from callers to response text.
///
/// Holds only read-only configuration, so one dispatcher can serve any
/// number of callers.
pub struct CommandDispatcher<S> {
    owner: OwnerConfig,
    settings: BotSettings,
    source: S,
    synthesizer: Box<dyn Synthesizer>,
    uptime: Uptime,
}

impl<S: BinSource> CommandDispatcher<S> {
    /// Creates a dispatcher that generates fake data with the thread RNG.
    #[must_use]
    pub fn new(owner: OwnerConfig, settings: BotSettings, source: S) -> Self {
        Self {
            owner,
            settings,
            source,
            synthesizer: Box::new(RandomSynthesizer),
            uptime: Uptime::start(),
        }
    }

    /// Replaces the fake data generator.
    #[must_use]
    pub fn with_synthesizer(mut self, synthesizer: Box<dyn Synthesizer>) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Replaces the start time reported by `status`.
    #[must_use]
    pub fn with_uptime(mut self, uptime: Uptime) -> Self {
        self.uptime = uptime;
        self
    }

    /// The lookup source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Tries to parse and execute a command from a chat line.
    ///
    /// Returns `None` if the line is not a command.
    pub async fn try_handle(&self, message_text: &str, caller: &CallerId) -> Option<CommandResult> {
        let (token, params) = BotCommand::split_message(message_text, &self.settings.command_prefix)?;
        Some(self.handle(&token, caller, Some(params.as_slice())).await)
    }

    /// Executes one command for `caller`.
    pub async fn handle(
        &self,
        command: &str,
        caller: &CallerId,
        params: Option<&[String]>,
    ) -> CommandResult {
        let command = BotCommand::from_token(command, &self.settings.command_prefix, params);

        debug!("Handling command from {}: {}", caller, command);
        let result = self.execute(command, caller).await;
        info!(
            "Command result: success={}, shutdown_requested={}",
            result.success, result.shutdown_requested
        );

        result
    }

    async fn execute(&self, command: BotCommand, caller: &CallerId) -> CommandResult {
        if command.is_owner_only() && !self.owner.is_owner(caller.as_str()) {
            warn!("Refused {} for non-owner {}", command, caller);
            return CommandResult::error(UNAUTHORIZED_TEXT);
        }

        match command {
            BotCommand::Start => self.handle_start(),
            BotCommand::Help => self.handle_help(),
            BotCommand::Credits => self.handle_credits(),
            BotCommand::Ping => CommandResult::success(PONG_TEXT),
            BotCommand::IpGen => self.handle_ipgen(),
            BotCommand::Faker => self.handle_faker(),
            BotCommand::Bin(param) => self.handle_bin(param.as_deref()).await,
            BotCommand::Admin => self.handle_admin(),
            BotCommand::Shutdown => CommandResult::shutdown(SHUTDOWN_TEXT),
            BotCommand::Status => self.handle_status(),
            BotCommand::Unknown(_) => CommandResult::error(self.not_recognized_text()),
        }
    }

    /// Reply for any token that is not a command.
    pub fn not_recognized_text(&self) -> String {
        format!(
            "⚠️ Command not recognized. Use {}help to see available commands.",
            self.settings.command_prefix
        )
    }

    fn handle_start(&self) -> CommandResult {
        CommandResult::success(format!(
            "👋 Welcome to the bot!\nUse {}help to see available commands.",
            self.settings.command_prefix
        ))
    }

    fn handle_help(&self) -> CommandResult {
        let prefix = &self.settings.command_prefix;
        let mut lines = vec!["🤖 *Bot Commands*:".to_owned()];

        for (usage, desc) in BotCommand::all_commands() {
            lines.push(format!("- {prefix}{usage}: {desc}"));
        }

        CommandResult::success(lines.join("\n"))
    }

    fn handle_credits(&self) -> CommandResult {
        CommandResult::success(format!(
            "🤖 *Bot created by {}* (ID: {})\n🌟 Powered by Rust.",
            self.owner.owner_username, self.owner.owner_id
        ))
    }

    fn handle_ipgen(&self) -> CommandResult {
        let ips = self.synthesizer.fake_ips(self.settings.ipgen_count);
        let list = ips
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        CommandResult::success(format!(
            "🖥️ Here are some randomly generated IP addresses:\n{list}"
        ))
    }

    fn handle_faker(&self) -> CommandResult {
        let details = self.synthesizer.fake_identity();

        CommandResult::success(format!(
            "📝 Fake Details:\n\
             Name: {}\n\
             Address: {}\n\
             Country: {}\n\
             Email: {}\n\
             Phone: {}",
            details.name, details.address, details.country, details.email, details.phone_number
        ))
    }

    async fn handle_bin(&self, param: Option<&str>) -> CommandResult {
        let Some(param) = param else {
            return CommandResult::error(format!(
                "Usage: {}bin <first 6 digits of a card number>",
                self.settings.command_prefix
            ));
        };

        match lookup_bin(&self.source, param).await {
            Ok(record) => CommandResult::success(format_record(&record)),
            Err(LookupError::InvalidInput(reason)) => {
                CommandResult::error(format!("❌ Invalid BIN ({reason})."))
            }
            Err(LookupError::NotFound) => CommandResult::error(BIN_NOT_FOUND_TEXT),
            Err(LookupError::LookupUnavailable(reason)) => {
                warn!("BIN lookup unavailable: {}", reason);
                CommandResult::error(BIN_UNAVAILABLE_TEXT)
            }
        }
    }

    fn handle_admin(&self) -> CommandResult {
        let prefix = &self.settings.command_prefix;
        CommandResult::success(format!(
            "👑 *Welcome, {}* (ID: {})!\n\
             Here are your admin commands:\n\
             - {prefix}shutdown: Shut down the bot\n\
             - {prefix}status: Check bot status",
            self.owner.owner_username, self.owner.owner_id
        ))
    }

    fn handle_status(&self) -> CommandResult {
        CommandResult::success(format!(
            "✅ Bot is up and running!\nUptime: {}",
            self.uptime.formatted()
        ))
    }
}

/// Formats a resolved record as a chat reply.
#[must_use]
pub fn format_record(record: &BinRecord) -> String {
    format!(
        "💳 BIN Details:\n\
         Bank: {}\n\
         Country: {} {}\n\
         Brand: {}\n\
         Level: {}\n\
         Type: {}",
        record.issuer,
        record.territory,
        record.flag(),
        record.brand,
        record.tier,
        record.category
    )
}

impl<S> std::fmt::Debug for CommandDispatcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("owner_id", &self.owner.owner_id)
            .field("command_prefix", &self.settings.command_prefix)
            .finish_non_exhaustive()
    }
}

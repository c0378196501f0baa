//! BIN Bot - Main Entry Point
//!
//! Runs the command dispatcher behind an interactive console, with a
//! heartbeat logging liveness in the background.

use std::io::{BufRead, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Input;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use bin_bot::commands::{CallerId, CommandDispatcher};
use bin_bot::config::{BotSettings, LookupSettings, OwnerConfig};
use bin_bot::heartbeat::{Heartbeat, HeartbeatMessage, Uptime};
use bin_bot::lookup::{BinSource, BinsSuClient};

/// Chat command bot with BIN checksum validation and issuer lookup.
#[derive(Parser, Debug)]
#[command(name = "bin_bot")]
#[command(about = "Answer bot commands from an interactive console")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Caller identity to send commands as (defaults to the owner).
    #[arg(long)]
    caller: Option<String>,

    /// Dispatch a single command line, print the reply, and exit.
    #[arg(long)]
    once: Option<String>,
}

/// A line typed at the console, acknowledged once its reply is printed.
struct ConsoleLine {
    text: String,
    done: oneshot::Sender<()>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Load configurations
    let owner = OwnerConfig::from_env().context("Failed to load owner configuration")?;
    let settings = BotSettings::from_env_with_defaults();
    let lookup_settings = LookupSettings::from_env_with_defaults();

    if owner.bot_token.is_none() {
        info!("BOT_TOKEN not set; only the console front-end is available");
    }

    let source =
        BinsSuClient::new(&lookup_settings).context("Failed to create BIN lookup client")?;
    info!("BIN lookups go to {}", source.endpoint());

    let uptime = Uptime::start();
    let caller = CallerId::new(args.caller.unwrap_or_else(|| owner.owner_id.clone()));
    let dispatcher =
        CommandDispatcher::new(owner, settings.clone(), source).with_uptime(uptime);

    // One-shot mode
    if let Some(line) = args.once {
        let result = match dispatcher.try_handle(&line, &caller).await {
            Some(result) => result.message,
            None => dispatcher.not_recognized_text(),
        };
        println!("{result}");
        return Ok(());
    }

    // Create heartbeat channel
    let (heartbeat_tx, heartbeat_rx) = mpsc::channel::<HeartbeatMessage>(8);
    let heartbeat = Heartbeat::from_secs(uptime, settings.heartbeat_interval_secs);

    // Spawn heartbeat task
    let heartbeat_handle = tokio::spawn(async move { heartbeat.run(heartbeat_rx).await });

    info!(
        "Bot is ready. Type {}help for commands, Ctrl+C to stop.",
        settings.command_prefix
    );

    let console = spawn_console_reader();

    tokio::select! {
        () = console_loop(&dispatcher, &caller, console) => {
            info!("Console closed, shutting down...");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    // Cleanup
    let _ = heartbeat_tx.send(HeartbeatMessage::Shutdown).await;
    let _ = heartbeat_handle.await;

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Reads console lines on a dedicated thread.
///
/// A terminal gets an interactive prompt; piped input is read line by line.
/// The thread waits for each line to be acknowledged before reading again,
/// so a command is fully answered before the next one is read.
fn spawn_console_reader() -> mpsc::Receiver<ConsoleLine> {
    let (tx, rx) = mpsc::channel(1);
    let interactive = std::io::stdin().is_terminal();
    if !interactive {
        info!("stdin is not a terminal, reading commands line by line");
    }

    std::thread::spawn(move || {
        let mut piped = (!interactive).then(|| std::io::stdin().lock().lines());

        loop {
            let read = match piped.as_mut() {
                Some(lines) => next_piped_line(lines),
                None => Input::<String>::new()
                    .with_prompt(">")
                    .allow_empty(true)
                    .interact_text()
                    .map(Some)
                    .map_err(|e| e.to_string()),
            };

            let text = match read {
                Ok(Some(text)) => text,
                Ok(None) => {
                    debug!("Console input reached end of file");
                    break;
                }
                Err(e) => {
                    warn!("Console input closed: {}", e);
                    break;
                }
            };

            let (done, done_rx) = oneshot::channel();
            if tx.blocking_send(ConsoleLine { text, done }).is_err() {
                break;
            }
            if done_rx.blocking_recv().is_err() {
                break;
            }
        }
    });

    rx
}

/// Pulls the next line from piped input, `None` at end of input.
fn next_piped_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<Option<String>, String> {
    lines.next().transpose().map_err(|e| e.to_string())
}

/// Dispatches console lines until input ends or the owner shuts the bot down.
async fn console_loop<S: BinSource>(
    dispatcher: &CommandDispatcher<S>,
    caller: &CallerId,
    mut lines: mpsc::Receiver<ConsoleLine>,
) {
    while let Some(line) = lines.recv().await {
        if line.text.trim().is_empty() {
            let _ = line.done.send(());
            continue;
        }

        let shutdown = match dispatcher.try_handle(&line.text, caller).await {
            Some(result) => {
                println!("{}", result.message);
                result.shutdown_requested
            }
            None => {
                println!("{}", dispatcher.not_recognized_text());
                false
            }
        };

        if shutdown {
            warn!("Shutdown requested by {}", caller);
            break;
        }

        let _ = line.done.send(());
    }
}

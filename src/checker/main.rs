//! Standalone BIN checker.
//!
//! Runs the checksum filter on a number and, unless told to stay offline,
//! looks the fragment up and prints the resolved record.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bin_bot::commands::format_record;
use bin_bot::config::LookupSettings;
use bin_bot::lookup::{BinsSuClient, FRAGMENT_LEN, LookupError, checked_fragment, lookup_bin};

/// BIN checksum and lookup tool.
#[derive(Parser, Debug)]
#[command(name = "bin_check")]
#[command(about = "Checks a BIN and looks up its issuer")]
#[command(version)]
struct Args {
    /// Card number or BIN; only the first six digits are used.
    number: String,

    /// Only run the checksum, do not contact the lookup source.
    #[arg(long)]
    offline: bool,

    /// Print the record as JSON.
    #[arg(short, long)]
    json: bool,

    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let _ = dotenvy::from_filename(&args.env_file);

    let fragment = match checked_fragment(&args.number) {
        Ok(fragment) => fragment,
        Err(e) => {
            println!("✗ {e}, no lookup performed");
            return ExitCode::FAILURE;
        }
    };

    println!("Fragment: {fragment} (first {FRAGMENT_LEN} digits)");
    println!("✓ Checksum passed");

    if args.offline {
        return ExitCode::SUCCESS;
    }

    lookup(&args.number, args.json).await
}

async fn lookup(number: &str, json: bool) -> ExitCode {
    let settings = LookupSettings::from_env_with_defaults();

    let client = match BinsSuClient::new(&settings) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("✗ {e}");
            return ExitCode::FAILURE;
        }
    };

    match lookup_bin(&client, number).await {
        Ok(record) if json => match serde_json::to_string_pretty(&record) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("✗ Failed to encode record: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(record) => {
            println!("\n{}", format_record(&record));
            ExitCode::SUCCESS
        }
        Err(LookupError::NotFound) => {
            println!("✗ No record found");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

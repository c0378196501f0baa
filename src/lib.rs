//! BIN Bot Library
//!
//! A chat command bot that checks and looks up bank identification numbers.
//!
//! This crate provides the core functionality for:
//! - Filtering BIN fragments with a Luhn-style checksum
//! - Looking up issuer details from a scraped HTML source
//! - Resolving country names to flag emoji
//! - Generating fake identities and IP addresses
//! - Dispatching chat commands with owner-only gating

pub mod commands;
pub mod config;
pub mod flag;
pub mod heartbeat;
pub mod lookup;
pub mod synth;

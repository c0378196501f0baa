//! Liveness reporting.
//!
//! The heartbeat runs beside the command loop and shares nothing with it
//! except the read-only start time.

mod runner;
mod uptime;

pub use runner::{Heartbeat, HeartbeatMessage, MIN_PERIOD};
pub use uptime::{Uptime, format_duration};

//! Process start time.

use chrono::{DateTime, Utc};

/// Wall-clock time the bot started, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    started_at: DateTime<Utc>,
}

impl Uptime {
    /// Records the current time as the start.
    #[must_use]
    pub fn start() -> Self {
        Self::since(Utc::now())
    }

    /// Uses a given start time.
    #[must_use]
    pub const fn since(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    /// Whole seconds elapsed since start, zero if the clock went backwards.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        u64::try_from((Utc::now() - self.started_at).num_seconds()).unwrap_or(0)
    }

    /// Elapsed time as a short human-readable string.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_duration(self.elapsed_secs())
    }
}

/// Formats a duration in seconds to a human-readable string.
#[must_use]
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 {
            format!("{hours}h")
        } else {
            format!("{hours}h {mins}m")
        }
    } else {
        let days = secs / 86_400;
        let hours = (secs % 86_400) / 3600;
        if hours == 0 {
            format!("{days}d")
        } else {
            format!("{days}d {hours}h")
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30), "30s");
        assert_eq!(format_duration(60), "1m");
        assert_eq!(format_duration(90), "1m");
        assert_eq!(format_duration(3600), "1h");
        assert_eq!(format_duration(3660), "1h 1m");
        assert_eq!(format_duration(86_400), "1d");
        assert_eq!(format_duration(90_000), "1d 1h");
    }

    #[test]
    fn test_elapsed_since_past_start() {
        let uptime = Uptime::since(Utc::now() - Duration::seconds(125));
        assert!(uptime.elapsed_secs() >= 125);
        assert_eq!(uptime.formatted(), "2m");
    }

    #[test]
    fn test_future_start_clamps_to_zero() {
        let uptime = Uptime::since(Utc::now() + Duration::seconds(600));
        assert_eq!(uptime.elapsed_secs(), 0);
    }
}

//! Idle loop that reports liveness.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

use super::Uptime;

/// Messages that can be sent to the heartbeat.
#[derive(Debug, Clone)]
pub enum HeartbeatMessage {
    /// Log a liveness line immediately.
    Beat,
    /// Stop the loop.
    Shutdown,
}

/// Shortest period a heartbeat will run with.
pub const MIN_PERIOD: Duration = Duration::from_secs(1);

/// Periodically logs that the bot is alive.
pub struct Heartbeat {
    uptime: Uptime,
    period: Duration,
}

impl Heartbeat {
    /// Creates a heartbeat with the given period, raised to [`MIN_PERIOD`]
    /// if shorter.
    #[must_use]
    pub fn new(uptime: Uptime, period: Duration) -> Self {
        Self {
            uptime,
            period: period.max(MIN_PERIOD),
        }
    }

    /// Creates a heartbeat from a period in seconds.
    #[must_use]
    pub fn from_secs(uptime: Uptime, secs: u64) -> Self {
        Self::new(uptime, Duration::from_secs(secs))
    }

    /// Runs until a shutdown message arrives or every sender is dropped.
    ///
    /// Returns the number of beats logged.
    pub async fn run(&self, mut rx: mpsc::Receiver<HeartbeatMessage>) -> u64 {
        info!("Heartbeat started (every {:?})", self.period);

        let mut timer = interval(self.period);
        let mut beats = 0u64;

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    self.beat();
                    beats += 1;
                }
                msg = rx.recv() => {
                    match msg {
                        Some(HeartbeatMessage::Beat) => {
                            debug!("Received beat request");
                            self.beat();
                            beats += 1;
                        }
                        Some(HeartbeatMessage::Shutdown) | None => {
                            info!("Heartbeat stopping after {} beats", beats);
                            break;
                        }
                    }
                }
            }
        }

        beats
    }

    fn beat(&self) {
        info!("Bot is running... (up {})", self.uptime.formatted());
    }
}

impl std::fmt::Debug for Heartbeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heartbeat")
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}

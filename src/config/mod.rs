#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_zero_duration, validate_range, Validate};
use std::time::Duration;

/// Longest accepted grace period.
pub const MAX_GRACE_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);
/// Longest accepted keep-alive interval.
pub const MAX_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Timings of the delayed-exit responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownConfig {
    /// Time between the first signal and the forced exit.
    pub grace_period: Duration,
    /// Period of the no-op tick that keeps the event loop busy.
    pub keepalive_interval: Duration,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            grace_period: Duration::from_secs(5),
            keepalive_interval: Duration::from_secs(1),
        }
    }
}

impl Validate for ShutdownConfig {
    fn validate(&self) -> Result<()> {
        validate_non_zero_duration("grace_period", self.grace_period)?;
        validate_range("grace_period", self.grace_period, Duration::ZERO, MAX_GRACE_PERIOD)?;
        validate_non_zero_duration("keepalive_interval", self.keepalive_interval)?;
        validate_range(
            "keepalive_interval",
            self.keepalive_interval,
            Duration::ZERO,
            MAX_KEEPALIVE_INTERVAL,
        )?;
        Ok(())
    }
}

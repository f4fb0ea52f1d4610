use crate::config::ShutdownConfig;
use crate::domain::model::{ShutdownReport, ShutdownSignal};
use crate::domain::ports::SignalSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const FORCED_EXIT: &str = "Shutdown timeout reached. Forcing exit now.";

/// Acknowledges shutdown signals and exits once the grace period after the
/// first one has elapsed.
///
/// Later signals are acknowledged too, but the deadline armed by the first
/// signal never moves.
pub struct DelayedExit<S: SignalSource> {
    signals: S,
    config: ShutdownConfig,
}

impl<S: SignalSource> DelayedExit<S> {
    pub fn new(signals: S) -> Self {
        Self {
            signals,
            config: ShutdownConfig::default(),
        }
    }

    pub fn with_config(signals: S, config: ShutdownConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { signals, config })
    }

    pub fn config(&self) -> &ShutdownConfig {
        &self.config
    }

    pub async fn run<W: Write>(mut self, out: &mut W) -> Result<ShutdownReport> {
        let mut keepalive = time::interval(self.config.keepalive_interval);
        keepalive.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut armed: Option<(ShutdownSignal, Instant)> = None;
        let mut signals_received = 0usize;
        let mut signals_open = true;

        loop {
            tokio::select! {
                received = self.signals.recv(), if signals_open => {
                    let Some(signal) = received else {
                        tracing::debug!("Signal source closed");
                        signals_open = false;
                        continue;
                    };

                    signals_received += 1;
                    tracing::info!("Received {} (#{})", signal, signals_received);
                    writeln!(
                        out,
                        "Received {}. Shutting down in {} seconds...",
                        signal,
                        format_seconds(self.config.grace_period)
                    )?;
                    out.flush()?;

                    if armed.is_none() {
                        armed = Some((signal, Instant::now() + self.config.grace_period));
                        tracing::debug!("Forced exit armed for {:?} from now", self.config.grace_period);
                    }
                }
                _ = sleep_until(armed.map(|(_, deadline)| deadline)), if armed.is_some() => {
                    let Some((first_signal, _)) = armed else {
                        continue;
                    };
                    writeln!(out, "{}", FORCED_EXIT)?;
                    out.flush()?;

                    tracing::info!("Grace period after {} elapsed, exiting", first_signal);
                    return Ok(ShutdownReport {
                        first_signal,
                        signals_received,
                        exit_code: 0,
                    });
                }
                _ = keepalive.tick() => {
                    tracing::trace!("keep-alive");
                }
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

fn format_seconds(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        duration.as_secs().to_string()
    } else {
        format!("{}", duration.as_secs_f64())
    }
}

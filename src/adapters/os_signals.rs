use crate::domain::model::ShutdownSignal;
use crate::domain::ports::SignalSource;
use crate::utils::error::{ProbeError, Result};

/// Host process signals. Handlers are registered by [`OsSignals::install`];
/// from then on the default disposition (terminate) no longer applies.
#[cfg(unix)]
pub struct OsSignals {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl OsSignals {
    pub fn install() -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = signal(SignalKind::interrupt()).map_err(|source| {
            ProbeError::SignalInstallError {
                signal: ShutdownSignal::Interrupt.name(),
                source,
            }
        })?;
        let terminate = signal(SignalKind::terminate()).map_err(|source| {
            ProbeError::SignalInstallError {
                signal: ShutdownSignal::Terminate.name(),
                source,
            }
        })?;

        Ok(Self {
            interrupt,
            terminate,
        })
    }
}

#[cfg(unix)]
impl SignalSource for OsSignals {
    async fn recv(&mut self) -> Option<ShutdownSignal> {
        tokio::select! {
            Some(()) = self.interrupt.recv() => Some(ShutdownSignal::Interrupt),
            Some(()) = self.terminate.recv() => Some(ShutdownSignal::Terminate),
            else => None,
        }
    }
}

// Only Ctrl-C is observable on Windows; it maps to SIGINT.
#[cfg(windows)]
pub struct OsSignals {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(windows)]
impl OsSignals {
    pub fn install() -> Result<Self> {
        let ctrl_c = tokio::signal::windows::ctrl_c().map_err(|source| {
            ProbeError::SignalInstallError {
                signal: ShutdownSignal::Interrupt.name(),
                source,
            }
        })?;
        Ok(Self { ctrl_c })
    }
}

#[cfg(windows)]
impl SignalSource for OsSignals {
    async fn recv(&mut self) -> Option<ShutdownSignal> {
        self.ctrl_c.recv().await.map(|()| ShutdownSignal::Interrupt)
    }
}

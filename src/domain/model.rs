use std::fmt;

/// A request to stop the process, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub fn name(&self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a completed delayed exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownReport {
    pub first_signal: ShutdownSignal,
    pub signals_received: usize,
    /// Status the process must exit with. A completed delayed exit is a
    /// success, so this is always 0.
    pub exit_code: i32,
}

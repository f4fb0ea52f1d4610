pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::ShutdownCli;

pub use adapters::{ChannelSignals, OsSignals, SignalSender};
pub use config::ShutdownConfig;
pub use core::{reporter::ArgumentReporter, shutdown::DelayedExit};
pub use domain::model::{ShutdownReport, ShutdownSignal};
pub use domain::ports::SignalSource;
pub use utils::error::{ProbeError, Result};

pub mod reporter;
pub mod shutdown;

pub use crate::domain::model::{ShutdownReport, ShutdownSignal};
pub use crate::domain::ports::SignalSource;
pub use crate::utils::error::Result;

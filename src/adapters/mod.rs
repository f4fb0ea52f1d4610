// Adapters layer: concrete signal sources for the delayed-exit responder.

pub mod channel;
pub mod os_signals;

pub use channel::{ChannelSignals, SignalSender};
pub use os_signals::OsSignals;

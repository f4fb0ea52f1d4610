use crate::domain::model::ShutdownSignal;

/// Something that yields shutdown requests. `None` means no more will arrive.
pub trait SignalSource: Send {
    fn recv(&mut self) -> impl std::future::Future<Output = Option<ShutdownSignal>> + Send;
}

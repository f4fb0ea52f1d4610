use crate::domain::model::ShutdownSignal;
use crate::domain::ports::SignalSource;
use tokio::sync::mpsc;

/// In-process signal source, fed through a [`SignalSender`].
#[derive(Debug)]
pub struct ChannelSignals {
    rx: mpsc::UnboundedReceiver<ShutdownSignal>,
}

#[derive(Debug, Clone)]
pub struct SignalSender {
    tx: mpsc::UnboundedSender<ShutdownSignal>,
}

impl ChannelSignals {
    pub fn pair() -> (SignalSender, ChannelSignals) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SignalSender { tx }, ChannelSignals { rx })
    }
}

impl SignalSender {
    /// Returns false once the receiving side is gone.
    pub fn send(&self, signal: ShutdownSignal) -> bool {
        self.tx.send(signal).is_ok()
    }
}

impl SignalSource for ChannelSignals {
    async fn recv(&mut self) -> Option<ShutdownSignal> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivers_in_order_then_closes() {
        let (sender, mut signals) = ChannelSignals::pair();
        assert!(sender.send(ShutdownSignal::Interrupt));
        assert!(sender.send(ShutdownSignal::Terminate));
        drop(sender);

        assert_eq!(signals.recv().await, Some(ShutdownSignal::Interrupt));
        assert_eq!(signals.recv().await, Some(ShutdownSignal::Terminate));
        assert_eq!(signals.recv().await, None);
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (sender, signals) = ChannelSignals::pair();
        drop(signals);
        assert!(!sender.send(ShutdownSignal::Terminate));
    }
}

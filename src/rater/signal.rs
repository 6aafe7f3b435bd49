// Ratings-updated signal.
// Broadcasts a payload-free notice to every subscriber after a successful refresh.

use tokio::sync::broadcast;

/// Name of the signal, for hosts that bridge it onto their own event bus.
pub const RATINGS_UPDATED: &str = "ratings-updated";

const DEFAULT_CAPACITY: usize = 16;

/// Notice that a fresh rating count has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingsUpdated;

/// Publish side of the ratings-updated signal.
#[derive(Debug, Clone)]
pub struct UpdateSignal {
    sender: broadcast::Sender<RatingsUpdated>,
}

impl Default for UpdateSignal {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl UpdateSignal {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Register a new subscriber. It only sees signals emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<RatingsUpdated> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Emit one signal. Returns how many subscribers it reached.
    pub fn emit(&self) -> usize {
        // No subscribers is not an error
        self.sender.send(RatingsUpdated).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_emit_without_subscribers() {
        let signal = UpdateSignal::default();
        assert_eq!(signal.subscriber_count(), 0);
        assert_eq!(signal.emit(), 0);
    }

    #[test]
    fn test_every_subscriber_receives() {
        let signal = UpdateSignal::default();
        let mut first = signal.subscribe();
        let mut second = signal.subscribe();

        assert_eq!(signal.emit(), 2);

        assert_eq!(first.try_recv().unwrap(), RatingsUpdated);
        assert_eq!(second.try_recv().unwrap(), RatingsUpdated);
        assert!(matches!(first.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_late_subscriber_misses_earlier_signals() {
        let signal = UpdateSignal::default();
        let _early = signal.subscribe();
        signal.emit();

        let mut late = signal.subscribe();
        assert!(matches!(late.try_recv(), Err(TryRecvError::Empty)));
    }
}

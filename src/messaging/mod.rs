use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::order::CheckoutEvent;

// ============================================================================
// Messaging - Checkout Event Dispatch
// ============================================================================
//
// The handler announces completed commands; who listens is wiring. Dispatch
// is fire-and-forget for the caller: a failing subscriber is logged here and
// never fails the command that triggered it.
//
// ============================================================================

#[async_trait]
pub trait CheckoutEventDispatcher: Send + Sync {
    async fn dispatch(&self, event: CheckoutEvent);
}

#[async_trait]
pub trait CheckoutEventSubscriber: Send + Sync {
    async fn on_event(&self, event: &CheckoutEvent) -> Result<()>;
}

/// Dispatcher that notifies subscribers sequentially, in registration order.
#[derive(Default)]
pub struct InProcessDispatcher {
    subscribers: RwLock<Vec<Arc<dyn CheckoutEventSubscriber>>>,
}

impl InProcessDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn subscribe(&self, subscriber: Arc<dyn CheckoutEventSubscriber>) {
        self.subscribers.write().await.push(subscriber);
    }
}

#[async_trait]
impl CheckoutEventDispatcher for InProcessDispatcher {
    async fn dispatch(&self, event: CheckoutEvent) {
        let subscribers = self.subscribers.read().await.clone();
        debug!(
            event_id = %event.event_id,
            event_name = %event.name,
            subscriber_count = subscribers.len(),
            "Dispatching checkout event"
        );

        for subscriber in subscribers {
            if let Err(error) = subscriber.on_event(&event).await {
                warn!(
                    event_id = %event.event_id,
                    event_name = %event.name,
                    error = %error,
                    "Checkout event subscriber failed"
                );
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Order, OrderToken, ShippingAddressOrder};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CheckoutEventSubscriber for Recording {
        async fn on_event(&self, event: &CheckoutEvent) -> Result<()> {
            self.seen.lock().unwrap().push(event.name.clone());
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl CheckoutEventSubscriber for Failing {
        async fn on_event(&self, _event: &CheckoutEvent) -> Result<()> {
            anyhow::bail!("subscriber is broken")
        }
    }

    fn sample_event() -> CheckoutEvent {
        CheckoutEvent::shipping_address_set(
            Order::cart(OrderToken::new("T1")),
            ShippingAddressOrder::new(OrderToken::new("T1")),
        )
    }

    #[tokio::test]
    async fn test_every_subscriber_sees_the_event() {
        let dispatcher = InProcessDispatcher::new();
        let first = Arc::new(Recording::default());
        let second = Arc::new(Recording::default());
        dispatcher.subscribe(first.clone()).await;
        dispatcher.subscribe(second.clone()).await;

        dispatcher.dispatch(sample_event()).await;

        assert_eq!(first.seen.lock().unwrap().len(), 1);
        assert_eq!(second.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_subscriber_does_not_stop_dispatch() {
        let dispatcher = InProcessDispatcher::new();
        let recording = Arc::new(Recording::default());
        dispatcher.subscribe(Arc::new(Failing)).await;
        dispatcher.subscribe(recording.clone()).await;

        dispatcher.dispatch(sample_event()).await;

        assert_eq!(recording.seen.lock().unwrap().len(), 1);
    }
}

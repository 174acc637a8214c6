use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use storefront_plugin::domain::order::{
    Address, CheckoutEvent, CheckoutState, Order, OrderToken, ShippingAddressOrder,
    ShippingAddressOrderHandler, SET_SHIPPING_ADDRESS_COMPLETE,
};
use storefront_plugin::messaging::{CheckoutEventSubscriber, InProcessDispatcher};
use storefront_plugin::persistence::{InMemoryOrderStore, OrderRepository};
use storefront_plugin::resolver::{CheckoutAddressStateResolver, InMemoryCustomerDirectory};

// ============================================================================
// Checkout Flow - End-to-End Command Handling
// ============================================================================

#[derive(Default)]
struct RecordingSubscriber {
    events: Mutex<Vec<CheckoutEvent>>,
}

impl RecordingSubscriber {
    fn events(&self) -> Vec<CheckoutEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutEventSubscriber for RecordingSubscriber {
    async fn on_event(&self, event: &CheckoutEvent) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

struct Harness {
    store: Arc<InMemoryOrderStore>,
    recorder: Arc<RecordingSubscriber>,
    handler: ShippingAddressOrderHandler,
}

async fn harness() -> Harness {
    let store = Arc::new(InMemoryOrderStore::new());
    let recorder = Arc::new(RecordingSubscriber::default());
    let dispatcher = Arc::new(InProcessDispatcher::new());
    dispatcher.subscribe(recorder.clone()).await;

    let handler = ShippingAddressOrderHandler::new(
        store.clone(),
        Arc::new(InMemoryCustomerDirectory::new()),
        Arc::new(CheckoutAddressStateResolver::new()),
        store.clone(),
        dispatcher,
    );

    Harness {
        store,
        recorder,
        handler,
    }
}

fn shipping_address() -> Address {
    Address::new("Ada", "Lovelace", "12 Analytical Way", "London", "E1 6AN", "GB")
}

#[tokio::test]
async fn addressing_a_guest_cart_attaches_the_customer_and_announces_completion() {
    let harness = harness().await;
    let cart = Order::cart(OrderToken::new("T1"));
    let cart_id = cart.id;
    harness.store.put(cart).await;

    let order = harness
        .handler
        .handle(ShippingAddressOrder::new(OrderToken::new("T1")).with_email("ada@example.com"))
        .await
        .unwrap();

    // The customer is attached, the untouched fields stay untouched.
    assert_eq!(order.id, cart_id);
    assert_eq!(
        order.customer.as_ref().map(|c| c.email.as_str()),
        Some("ada@example.com")
    );
    assert!(order.shipping_address.is_none());
    assert_eq!(order.checkout_state, CheckoutState::Cart);

    // Exactly one completion event, carrying that order and the command.
    let events = harness.recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, SET_SHIPPING_ADDRESS_COMPLETE);
    assert_eq!(events[0].order.id, cart_id);
    assert_eq!(events[0].command.order_token_value, OrderToken::new("T1"));
    assert_eq!(events[0].command.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn full_command_addresses_the_cart_and_persists_the_transition() {
    let harness = harness().await;
    harness.store.put(Order::cart(OrderToken::new("T1"))).await;

    let order = harness
        .handler
        .handle(
            ShippingAddressOrder::new(OrderToken::new("T1"))
                .with_email("ada@example.com")
                .with_shipping_address(shipping_address()),
        )
        .await
        .unwrap();

    assert_eq!(order.checkout_state, CheckoutState::Addressed);
    assert_eq!(
        order.shipping_address.as_ref().map(|a| a.city.as_str()),
        Some("London")
    );

    let stored = harness
        .store
        .find_cart_by_token(&OrderToken::new("T1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.checkout_state, CheckoutState::Addressed);
    assert!(stored.customer.is_some());
}

#[tokio::test]
async fn readdressing_replaces_the_shipping_address_and_keeps_the_customer() {
    let harness = harness().await;
    harness.store.put(Order::cart(OrderToken::new("T1"))).await;

    let first = harness
        .handler
        .handle(
            ShippingAddressOrder::new(OrderToken::new("T1"))
                .with_email("ada@example.com")
                .with_shipping_address(shipping_address()),
        )
        .await
        .unwrap();
    let customer_id = first.customer.as_ref().map(|c| c.id);

    let second = harness
        .handler
        .handle(
            ShippingAddressOrder::new(OrderToken::new("T1"))
                .with_email("someone-else@example.com")
                .with_shipping_address(Address::new(
                    "Grace",
                    "Hopper",
                    "1 Compiler Road",
                    "Arlington",
                    "22201",
                    "US",
                )),
        )
        .await
        .unwrap();

    // The order already has a customer, so the second email is ignored.
    assert_eq!(second.customer.as_ref().map(|c| c.id), customer_id);
    assert_eq!(
        second.shipping_address.as_ref().map(|a| a.city.as_str()),
        Some("Arlington")
    );
    assert_eq!(harness.recorder.events().len(), 2);
}

#[tokio::test]
async fn completed_checkout_is_no_longer_addressable() {
    let harness = harness().await;
    let mut order = Order::cart(OrderToken::new("T1"));
    order.checkout_state = CheckoutState::Completed;
    harness.store.put(order).await;

    let result = harness
        .handler
        .handle(ShippingAddressOrder::new(OrderToken::new("T1")).with_email("ada@example.com"))
        .await;

    let error = result.unwrap_err();
    assert_eq!(
        error.to_string(),
        "Order with T1 token has not been found."
    );
    assert!(harness.recorder.events().is_empty());
}

use std::sync::Arc;

use tracing::{debug, info};

use crate::messaging::CheckoutEventDispatcher;
use crate::persistence::{OrderPersister, OrderRepository};
use crate::resolver::{AddressStateResolver, CustomerResolver};

use super::aggregate::Order;
use super::commands::ShippingAddressOrder;
use super::errors::CheckoutError;
use super::events::CheckoutEvent;

// ============================================================================
// Shipping Address Command Handler
// ============================================================================
//
// Orchestrates: Command → Order mutation → Persist → Completion event
//
// The order is found by cart token or the command fails; everything after
// that is conditional on what the command carries. Dispatch failures stay
// with the dispatcher, the handler's result only reflects the mutation.
//
// ============================================================================

pub struct ShippingAddressOrderHandler {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerResolver>,
    address_state: Arc<dyn AddressStateResolver>,
    persister: Arc<dyn OrderPersister>,
    events: Arc<dyn CheckoutEventDispatcher>,
}

impl ShippingAddressOrderHandler {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerResolver>,
        address_state: Arc<dyn AddressStateResolver>,
        persister: Arc<dyn OrderPersister>,
        events: Arc<dyn CheckoutEventDispatcher>,
    ) -> Self {
        Self {
            orders,
            customers,
            address_state,
            persister,
            events,
        }
    }

    /// Handle a shipping-address command and return the mutated order.
    pub async fn handle(&self, command: ShippingAddressOrder) -> Result<Order, CheckoutError> {
        let token = &command.order_token_value;

        let mut order = self
            .orders
            .find_cart_by_token(token)
            .await?
            .ok_or_else(|| CheckoutError::OrderNotFound(token.clone()))?;

        debug!(order_id = %order.id, token = %token, "Handling shipping address command");

        if order.customer.is_none() {
            if let Some(email) = command.email.as_deref() {
                let customer =
                    self.customers
                        .resolve(email)
                        .await
                        .map_err(|source| CheckoutError::CustomerResolution {
                            email: email.to_string(),
                            source,
                        })?;
                debug!(order_id = %order.id, customer_id = %customer.id, "Attached customer to order");
                order.set_customer(customer);
            }
        }

        if let Some(address) = command.shipping_address.clone() {
            order.set_shipping_address(address);
        }

        self.address_state.resolve(&mut order);

        self.persister.persist(&order).await?;

        self.events
            .dispatch(CheckoutEvent::shipping_address_set(order.clone(), command))
            .await;

        info!(
            order_id = %order.id,
            checkout_state = ?order.checkout_state,
            "Shipping address command handled"
        );

        Ok(order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

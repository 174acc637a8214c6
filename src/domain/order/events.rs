use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::Order;
use super::commands::ShippingAddressOrder;

// ============================================================================
// Checkout Events
// ============================================================================

/// Name subscribers register under for the completed shipping-address
/// command.
pub const SET_SHIPPING_ADDRESS_COMPLETE: &str =
    "storefront.checkout.set_order_shipping_address.complete";

/// Completion event dispatched after a checkout command was handled.
///
/// Carries the mutated order and the originating command, so subscribers
/// can react without another repository round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutEvent {
    pub event_id: Uuid,
    pub name: String,
    pub order: Order,
    pub command: ShippingAddressOrder,
    pub occurred_at: DateTime<Utc>,
}

impl CheckoutEvent {
    pub fn shipping_address_set(order: Order, command: ShippingAddressOrder) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            name: SET_SHIPPING_ADDRESS_COMPLETE.to_string(),
            order,
            command,
            occurred_at: Utc::now(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

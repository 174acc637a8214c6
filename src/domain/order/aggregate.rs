use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::customer::Customer;

use super::value_objects::{Address, CheckoutState, OrderToken};

// ============================================================================
// Order Aggregate
// ============================================================================
//
// The platform's order as this plugin sees it: identity, cart token, the
// optional customer, the two addresses and the checkout state. Mutators bump
// `updated_at`; persistence stays with the repository.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub token: OrderToken,
    pub customer: Option<Customer>,
    pub shipping_address: Option<Address>,
    /// Present on the platform's order; this plugin never writes it.
    pub billing_address: Option<Address>,
    pub checkout_state: CheckoutState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// A fresh cart reachable under `token`.
    pub fn cart(token: OrderToken) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            token,
            customer: None,
            shipping_address: None,
            billing_address: None,
            checkout_state: CheckoutState::Cart,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
        self.touch();
    }

    pub fn set_shipping_address(&mut self, address: Address) {
        self.shipping_address = Some(address);
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cart_has_no_customer_or_addresses() {
        let order = Order::cart(OrderToken::new("T1"));

        assert_eq!(order.token, OrderToken::new("T1"));
        assert!(order.customer.is_none());
        assert!(order.shipping_address.is_none());
        assert!(order.billing_address.is_none());
        assert_eq!(order.checkout_state, CheckoutState::Cart);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_mutators_bump_updated_at() {
        let mut order = Order::cart(OrderToken::new("T1"));
        let created = order.created_at;

        order.set_customer(Customer::new("shop@example.com"));
        order.set_shipping_address(Address::new(
            "Ada",
            "Lovelace",
            "12 Analytical Way",
            "London",
            "E1 6AN",
            "GB",
        ));

        assert!(order.customer.is_some());
        assert!(order.shipping_address.is_some());
        assert!(order.updated_at >= created);
        assert_eq!(order.created_at, created);
    }

    #[test]
    fn test_order_serialization_round_trip() {
        let mut order = Order::cart(OrderToken::new("T1"));
        order.set_customer(Customer::new("shop@example.com"));

        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, order.id);
        assert_eq!(deserialized.token, order.token);
        assert_eq!(
            deserialized.customer.map(|c| c.email),
            Some("shop@example.com".to_string())
        );
    }
}

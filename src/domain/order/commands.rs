use serde::{Deserialize, Serialize};

use super::value_objects::{Address, OrderToken};

// ============================================================================
// Checkout Commands - Represent storefront intent
// ============================================================================

/// Ship-to instruction for the order behind a cart token.
///
/// `email` only matters for orders that have no customer yet, and
/// `shipping_address` is optional so the command can also just attach the
/// customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddressOrder {
    pub order_token_value: OrderToken,
    pub email: Option<String>,
    pub shipping_address: Option<Address>,
}

impl ShippingAddressOrder {
    pub fn new(order_token_value: OrderToken) -> Self {
        Self {
            order_token_value,
            email: None,
            shipping_address: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_shipping_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command_carries_only_the_token() {
        let command = ShippingAddressOrder::new(OrderToken::new("T1"));
        assert_eq!(command.order_token_value.as_str(), "T1");
        assert!(command.email.is_none());
        assert!(command.shipping_address.is_none());
    }

    #[test]
    fn test_builder_attaches_email_and_address() {
        let command = ShippingAddressOrder::new(OrderToken::new("T1"))
            .with_email("shop@example.com")
            .with_shipping_address(Address::new(
                "Ada",
                "Lovelace",
                "12 Analytical Way",
                "London",
                "E1 6AN",
                "GB",
            ));

        assert_eq!(command.email.as_deref(), Some("shop@example.com"));
        assert!(command.shipping_address.is_some());
    }
}

use crate::domain::order::{CheckoutState, Order};

// ============================================================================
// Address State Resolution
// ============================================================================
//
// After address mutations the order's checkout state has to be recomputed.
// The resolver is the piece of the checkout state machine this plugin owns:
// it applies the `address` transition when the order qualifies.
//
// ============================================================================

pub trait AddressStateResolver: Send + Sync {
    /// Recompute the order's address-completion state.
    fn resolve(&self, order: &mut Order);
}

/// Moves an order carrying a shipping address into `Addressed`, as long as
/// its current state still allows the transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckoutAddressStateResolver;

impl CheckoutAddressStateResolver {
    pub fn new() -> Self {
        Self
    }
}

impl AddressStateResolver for CheckoutAddressStateResolver {
    fn resolve(&self, order: &mut Order) {
        if order.shipping_address.is_none() {
            return;
        }
        if !order.checkout_state.can_address() {
            tracing::debug!(
                order_id = %order.id,
                checkout_state = ?order.checkout_state,
                "Address transition not available"
            );
            return;
        }
        if order.checkout_state != CheckoutState::Addressed {
            order.checkout_state = CheckoutState::Addressed;
            order.touch();
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Address, OrderToken};

    fn shipping_address() -> Address {
        Address::new("Ada", "Lovelace", "12 Analytical Way", "London", "E1 6AN", "GB")
    }

    #[test]
    fn test_cart_with_shipping_address_becomes_addressed() {
        let mut order = Order::cart(OrderToken::new("T1"));
        order.set_shipping_address(shipping_address());

        CheckoutAddressStateResolver::new().resolve(&mut order);

        assert_eq!(order.checkout_state, CheckoutState::Addressed);
    }

    #[test]
    fn test_order_without_address_keeps_its_state() {
        let mut order = Order::cart(OrderToken::new("T1"));

        CheckoutAddressStateResolver::new().resolve(&mut order);

        assert_eq!(order.checkout_state, CheckoutState::Cart);
    }

    #[test]
    fn test_completed_order_is_never_readdressed() {
        let mut order = Order::cart(OrderToken::new("T1"));
        order.set_shipping_address(shipping_address());
        order.checkout_state = CheckoutState::Completed;

        CheckoutAddressStateResolver::new().resolve(&mut order);

        assert_eq!(order.checkout_state, CheckoutState::Completed);
    }

    #[test]
    fn test_shipping_selected_order_returns_to_addressed() {
        let mut order = Order::cart(OrderToken::new("T1"));
        order.set_shipping_address(shipping_address());
        order.checkout_state = CheckoutState::ShippingSelected;

        CheckoutAddressStateResolver::new().resolve(&mut order);

        assert_eq!(order.checkout_state, CheckoutState::Addressed);
    }
}

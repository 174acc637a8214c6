use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Cart token the storefront hands out when a cart is created.
///
/// Storefront requests address orders by token, never by internal id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderToken(pub String);

impl OrderToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storefront postal address.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country_code: String,
    pub province_code: Option<String>,
    pub company: Option<String>,
    pub phone_number: Option<String>,
}

impl Address {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postcode: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            city: city.into(),
            postcode: postcode.into(),
            country_code: country_code.into(),
            province_code: None,
            company: None,
            phone_number: None,
        }
    }

    pub fn with_province_code(mut self, province_code: impl Into<String>) -> Self {
        self.province_code = Some(province_code.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Checkout progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    Cart,
    Addressed,
    ShippingSelected,
    ShippingSkipped,
    PaymentSelected,
    PaymentSkipped,
    Completed,
}

impl CheckoutState {
    /// Whether the checkout state machine still accepts the `address`
    /// transition.
    pub fn can_address(&self) -> bool {
        !matches!(self, CheckoutState::Completed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_token_displays_its_value() {
        let token = OrderToken::new("T1");
        assert_eq!(token.to_string(), "T1");
        assert_eq!(token.as_str(), "T1");
    }

    #[test]
    fn test_address_builder_fills_optional_fields() {
        let address = Address::new("Ada", "Lovelace", "12 Analytical Way", "London", "E1 6AN", "GB")
            .with_company("Engine Works")
            .with_phone_number("+44 20 7946 0000");

        assert_eq!(address.company.as_deref(), Some("Engine Works"));
        assert_eq!(address.phone_number.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(address.province_code, None);
    }

    #[test]
    fn test_every_state_but_completed_can_address() {
        let states = [
            CheckoutState::Cart,
            CheckoutState::Addressed,
            CheckoutState::ShippingSelected,
            CheckoutState::ShippingSkipped,
            CheckoutState::PaymentSelected,
            CheckoutState::PaymentSkipped,
        ];
        for state in states {
            assert!(state.can_address(), "{state:?} should accept addressing");
        }
        assert!(!CheckoutState::Completed.can_address());
    }

    #[test]
    fn test_checkout_state_serializes_snake_case() {
        let json = serde_json::to_string(&CheckoutState::ShippingSelected).unwrap();
        assert_eq!(json, "\"shipping_selected\"");

        let state: CheckoutState = serde_json::from_str("\"payment_skipped\"").unwrap();
        assert_eq!(state, CheckoutState::PaymentSkipped);
    }
}

use super::value_objects::OrderToken;

// ============================================================================
// Checkout Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Order with {0} token has not been found.")]
    OrderNotFound(OrderToken),

    #[error("Could not resolve a customer for {email}")]
    CustomerResolution {
        email: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Infrastructure(#[from] anyhow::Error),
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_token() {
        let error = CheckoutError::OrderNotFound(OrderToken::new("T1"));
        assert_eq!(error.to_string(), "Order with T1 token has not been found.");
    }
}

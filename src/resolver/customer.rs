use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::customer::Customer;

// ============================================================================
// Customer Resolution
// ============================================================================

#[async_trait]
pub trait CustomerResolver: Send + Sync {
    /// Return the customer registered under `email`, creating one when the
    /// address is unknown.
    async fn resolve(&self, email: &str) -> Result<Customer>;
}

/// Email-keyed customer directory for the demo wiring and tests.
///
/// Lookups are case-insensitive; the stored customer keeps the email as it
/// was first seen.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, customer: Customer) {
        let mut customers = self.customers.write().unwrap_or_else(|e| e.into_inner());
        customers.insert(customer.email.to_lowercase(), customer);
    }

    pub fn len(&self) -> usize {
        self.customers.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CustomerResolver for InMemoryCustomerDirectory {
    async fn resolve(&self, email: &str) -> Result<Customer> {
        let key = email.trim().to_lowercase();
        let mut customers = self.customers.write().unwrap_or_else(|e| e.into_inner());

        if let Some(existing) = customers.get(&key) {
            return Ok(existing.clone());
        }

        let customer = Customer::new(email.trim());
        tracing::debug!(
            email = %customer.email,
            customer_id = %customer.id,
            "Created customer for unknown email"
        );
        customers.insert(key, customer.clone());
        Ok(customer)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

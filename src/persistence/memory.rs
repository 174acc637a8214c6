use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::order::{CheckoutState, Order, OrderToken};

use super::{OrderPersister, OrderRepository};

// ============================================================================
// In-Memory Order Store
// ============================================================================

/// Token-keyed order store for the demo wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderToken, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an order directly, bypassing the persister.
    pub async fn put(&self, order: Order) {
        self.orders.write().await.insert(order.token.clone(), order);
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderStore {
    async fn find_cart_by_token(&self, token: &OrderToken) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .get(token)
            .filter(|order| order.checkout_state != CheckoutState::Completed)
            .cloned())
    }
}

#[async_trait]
impl OrderPersister for InMemoryOrderStore {
    async fn persist(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.token.clone(), order.clone());
        tracing::debug!(order_id = %order.id, token = %order.token, "Order persisted");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

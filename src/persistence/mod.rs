use anyhow::Result;
use async_trait::async_trait;

use crate::domain::order::{Order, OrderToken};

// ============================================================================
// Persistence Module - Order Repository Seams
// ============================================================================
//
// The host platform owns the ORM and its transaction boundaries. The plugin
// only needs two capabilities: find the cart behind a token and persist a
// mutated order.
//
// ============================================================================

pub mod memory;

// Re-export commonly used types
pub use memory::InMemoryOrderStore;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find the order behind a cart token, as long as its checkout is still
    /// open. Completed checkouts are no longer carts.
    async fn find_cart_by_token(&self, token: &OrderToken) -> Result<Option<Order>>;
}

#[async_trait]
pub trait OrderPersister: Send + Sync {
    async fn persist(&self, order: &Order) -> Result<()>;
}

// ============================================================================
// Order Domain - Storefront Checkout for the Order Aggregate
// ============================================================================
//
// This module contains ALL order-checkout code the plugin owns:
// - Value objects (OrderToken, Address, CheckoutState)
// - Commands (ShippingAddressOrder)
// - Events (CheckoutEvent)
// - Errors (CheckoutError enum)
// - Aggregate (Order as the plugin sees it)
// - Command Handler (ShippingAddressOrderHandler)
//
// Repository, customer resolution, state resolution and event dispatch stay
// behind traits; the host platform provides the real implementations.
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;

// ============================================================================
// Storefront Plugin
// ============================================================================
//
// Checkout command handling and attribute-driven collection filtering for an
// e-commerce platform. The host owns persistence, routing and the event bus;
// this crate owns the behavior behind those seams:
//
// - domain: order aggregate, checkout command/event, customer, attributes
// - query: builder, parameter/alias name generation, join expansion
// - filter: attribute value filter with type-driven coercion
// - resolver: customer, address-state and IRI resolution seams
// - persistence: order repository seams plus an in-memory store
// - messaging: checkout event dispatch
//
// ============================================================================

pub mod domain;
pub mod filter;
pub mod messaging;
pub mod persistence;
pub mod query;
pub mod resolver;

// Re-export the surface the host wires up
pub use domain::attribute::{Attribute, AttributeType};
pub use domain::customer::Customer;
pub use domain::order::{
    Address, CheckoutError, CheckoutEvent, CheckoutState, Order, OrderToken,
    ShippingAddressOrder, ShippingAddressOrderHandler, SET_SHIPPING_ADDRESS_COMPLETE,
};
pub use filter::{AttributeFilter, FilterOperator, FilterValue};
pub use query::{QueryBuilder, SequentialNameGenerator};

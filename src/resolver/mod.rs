// ============================================================================
// Resolver Module - Collaborator Seams
// ============================================================================

pub mod address_state;
pub mod customer;
pub mod iri;

// Re-export commonly used types
pub use address_state::{AddressStateResolver, CheckoutAddressStateResolver};
pub use customer::{CustomerResolver, InMemoryCustomerDirectory};
pub use iri::{InMemoryAttributeCatalog, IriConverter};

// ============================================================================
// Query Module - Builder, Name Generation, Join Expansion
// ============================================================================

pub mod builder;
pub mod joins;
pub mod names;

// Re-export commonly used types
pub use builder::{Join, QueryBuilder};
pub use joins::{AssociationJoins, JoinExpander};
pub use names::{QueryNameGenerator, SequentialNameGenerator};

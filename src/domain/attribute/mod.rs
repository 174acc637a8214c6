// ============================================================================
// Attribute Domain - Product Attribute Entity and Type Tags
// ============================================================================
//
// Attributes are the platform's EAV-style product metadata. The filter layer
// only needs their identity and declared type tag; value storage belongs to
// the host platform.
//
// ============================================================================

pub mod value_objects;

// Re-export for convenience
pub use value_objects::*;

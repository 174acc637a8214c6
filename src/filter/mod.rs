// ============================================================================
// Filter Module - Attribute Value Filtering
// ============================================================================

pub mod attribute_filter;
pub mod errors;
pub mod value;

// Re-export commonly used types
pub use attribute_filter::{
    AttributeFilter, FilterOperator, FilterParameterDescription, ATTRIBUTE_ID, VALUE,
};
pub use errors::{FilterError, NormalizeError};
pub use value::{normalize_value, FilterValue};

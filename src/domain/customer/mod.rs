use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Customer Domain
// ============================================================================
//
// The plugin only touches the customer to attach one to a guest order, so
// the model stays small: identity plus the email it was resolved under.
// Profile management belongs to the host platform.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub email: String,
}

impl Customer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::domain::attribute::Attribute;

// ============================================================================
// IRI Resolution
// ============================================================================
//
// Filter requests reference the attribute by IRI, the way the host API
// exposes it. Resolution is the host router's job; this trait is the seam
// the filter talks through.
//
// ============================================================================

#[async_trait]
pub trait IriConverter: Send + Sync {
    /// Resolve the attribute an IRI points at.
    async fn attribute_from_iri(&self, iri: &str) -> Result<Attribute>;
}

/// IRI-keyed attribute catalog for the demo wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryAttributeCatalog {
    attributes: RwLock<HashMap<String, Attribute>>,
}

impl InMemoryAttributeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attribute and return the IRI it becomes reachable under.
    pub fn register(&self, attribute: Attribute) -> String {
        let iri = format!("/api/v2/shop/product-attributes/{}", attribute.code);
        let mut attributes = self.attributes.write().unwrap_or_else(|e| e.into_inner());
        attributes.insert(iri.clone(), attribute);
        iri
    }
}

#[async_trait]
impl IriConverter for InMemoryAttributeCatalog {
    async fn attribute_from_iri(&self, iri: &str) -> Result<Attribute> {
        let attributes = self.attributes.read().unwrap_or_else(|e| e.into_inner());
        match attributes.get(iri) {
            Some(attribute) => Ok(attribute.clone()),
            None => bail!("No attribute registered under IRI {iri}"),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

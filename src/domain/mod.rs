// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains the domain models the plugin works on:
// - order: checkout command, events and the shipping-address handler
// - customer: the customer attached to guest orders
// - attribute: product attributes and their declared types
//
// This layer is completely separate from query building and filtering.
//
// ============================================================================

pub mod attribute;
pub mod customer;
pub mod order;

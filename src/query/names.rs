use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Query Name Generation
// ============================================================================
//
// Every predicate a filter adds binds a named parameter, and every expanded
// association needs an alias. Names must be unique within one query even
// when the same filter runs several times, so generation goes through a
// per-query generator instead of the filters inventing names themselves.
//
// ============================================================================

pub trait QueryNameGenerator: Send + Sync {
    /// A parameter name unique within the query, derived from `field`.
    fn generate_parameter_name(&self, field: &str) -> String;

    /// A join alias unique within the query, derived from `association`.
    fn generate_join_alias(&self, association: &str) -> String;
}

/// Counter-backed generator. One instance lives for the duration of a single
/// query being built; parameter and join counters advance independently.
#[derive(Debug, Default)]
pub struct SequentialNameGenerator {
    parameters: AtomicUsize,
    joins: AtomicUsize,
}

impl SequentialNameGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryNameGenerator for SequentialNameGenerator {
    fn generate_parameter_name(&self, field: &str) -> String {
        let n = self.parameters.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_p{}", sanitize(field), n)
    }

    fn generate_join_alias(&self, association: &str) -> String {
        let n = self.joins.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_a{}", sanitize(association), n)
    }
}

/// Placeholder names end up inside query text, so anything that is not
/// alphanumeric collapses to an underscore.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names_are_unique() {
        let names = SequentialNameGenerator::new();
        let first = names.generate_parameter_name("material");
        let second = names.generate_parameter_name("material");
        assert_eq!(first, "material_p1");
        assert_eq!(second, "material_p2");
        assert_ne!(first, second);
    }

    #[test]
    fn test_parameter_and_join_counters_are_independent() {
        let names = SequentialNameGenerator::new();
        assert_eq!(names.generate_parameter_name("a"), "a_p1");
        assert_eq!(names.generate_join_alias("attributes"), "attributes_a1");
        assert_eq!(names.generate_parameter_name("b"), "b_p2");
        assert_eq!(names.generate_join_alias("attributes"), "attributes_a2");
    }

    #[test]
    fn test_non_alphanumeric_characters_are_sanitized() {
        let names = SequentialNameGenerator::new();
        assert_eq!(
            names.generate_parameter_name("variants.material"),
            "variants_material_p1"
        );
        assert_eq!(names.generate_join_alias("product-taxons"), "product_taxons_a1");
    }
}

use std::collections::HashSet;

use super::builder::QueryBuilder;
use super::names::QueryNameGenerator;

// ============================================================================
// Join Expansion for Nested Properties
// ============================================================================
//
// A filterable property can live behind an association of the queried
// resource (e.g. filtering products on their variants). The expander knows
// which property names are associations, adds the join and hands back the
// alias the predicate should target. Plain properties come back as `None`
// and the predicate targets the root alias.
//
// ============================================================================

pub trait JoinExpander: Send + Sync {
    /// When `property` names an association of the queried resource, add the
    /// join to `query` and return the alias the predicate should target.
    fn join_nested_property(
        &self,
        property: &str,
        root_alias: &str,
        query: &mut QueryBuilder,
        names: &dyn QueryNameGenerator,
    ) -> Option<String>;
}

/// Join expander backed by an explicit set of association names.
#[derive(Debug, Default)]
pub struct AssociationJoins {
    associations: HashSet<String>,
}

impl AssociationJoins {
    pub fn new<I, S>(associations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            associations: associations.into_iter().map(Into::into).collect(),
        }
    }
}

impl JoinExpander for AssociationJoins {
    fn join_nested_property(
        &self,
        property: &str,
        root_alias: &str,
        query: &mut QueryBuilder,
        names: &dyn QueryNameGenerator,
    ) -> Option<String> {
        if !self.associations.contains(property) {
            return None;
        }

        let alias = names.generate_join_alias(property);
        query.left_join(format!("{root_alias}.{property}"), alias.clone());
        tracing::debug!(property, alias = %alias, "Expanded nested property into a join");
        Some(alias)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::names::SequentialNameGenerator;

    #[test]
    fn test_plain_property_is_not_joined() {
        let joins = AssociationJoins::new(["attributes"]);
        let names = SequentialNameGenerator::new();
        let mut query = QueryBuilder::new("o");

        let alias = joins.join_nested_property("code", "o", &mut query, &names);

        assert_eq!(alias, None);
        assert!(query.joins().is_empty());
    }

    #[test]
    fn test_association_gets_a_join_and_alias() {
        let joins = AssociationJoins::new(["attributes"]);
        let names = SequentialNameGenerator::new();
        let mut query = QueryBuilder::new("o");

        let alias = joins.join_nested_property("attributes", "o", &mut query, &names);

        assert_eq!(alias.as_deref(), Some("attributes_a1"));
        assert_eq!(query.joins().len(), 1);
        assert_eq!(query.joins()[0].path, "o.attributes");
        assert_eq!(query.joins()[0].alias, "attributes_a1");
    }
}

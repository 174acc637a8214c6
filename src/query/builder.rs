use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::filter::FilterValue;

// ============================================================================
// Query Builder - Accumulating Predicate Conjunction
// ============================================================================
//
// A thin stand-in for the host platform's ORM query builder: filters append
// conditions and bind named parameters, the host turns the result into an
// executable query. Conditions are AND-ed; parameter names are expected to
// be unique (see query::names).
//
// ============================================================================

/// A left-join added while expanding a nested property.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub path: String,
    pub alias: String,
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    root_alias: String,
    joins: Vec<Join>,
    conditions: Vec<String>,
    parameters: BTreeMap<String, FilterValue>,
}

impl QueryBuilder {
    pub fn new(root_alias: impl Into<String>) -> Self {
        Self {
            root_alias: root_alias.into(),
            joins: Vec::new(),
            conditions: Vec::new(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn root_alias(&self) -> &str {
        &self.root_alias
    }

    /// Append a condition to the conjunction.
    pub fn and_where(&mut self, condition: impl Into<String>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    /// Bind a value under a named parameter. Re-binding a name replaces the
    /// previous value.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: FilterValue) -> &mut Self {
        self.parameters.insert(name.into(), value);
        self
    }

    pub fn left_join(&mut self, path: impl Into<String>, alias: impl Into<String>) -> &mut Self {
        self.joins.push(Join {
            path: path.into(),
            alias: alias.into(),
        });
        self
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn parameters(&self) -> &BTreeMap<String, FilterValue> {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&FilterValue> {
        self.parameters.get(name)
    }

    /// True when no filter has touched the builder.
    pub fn is_empty(&self) -> bool {
        self.joins.is_empty() && self.conditions.is_empty() && self.parameters.is_empty()
    }

    /// Render the accumulated joins and conjunction, mostly for logs and
    /// inspection; execution stays with the host.
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        for join in &self.joins {
            let _ = write!(sql, "LEFT JOIN {} {} ", join.path, join.alias);
        }
        if !self.conditions.is_empty() {
            sql.push_str("WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        sql.trim_end().to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

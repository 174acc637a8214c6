use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::filter::errors::FilterError;
use crate::filter::value::normalize_value;
use crate::query::{JoinExpander, QueryBuilder, QueryNameGenerator};
use crate::resolver::IriConverter;

// ============================================================================
// Attribute Value Filter
// ============================================================================
//
// Collection filter for "give me the resources whose attribute X has value
// Y". The request carries the attribute as an IRI plus a raw string value;
// the attribute's declared type decides how the value is coerced, and exact
// predicates target the column named after that type.
//
// Malformed requests never produce a malformed predicate: they are dropped
// here, with a diagnostic per missing key. The one deliberate exception is a
// date-typed attribute with an unparseable value, which fails the whole
// application.
//
// ============================================================================

/// Key of the filter sub-parameter carrying the attribute IRI.
pub const ATTRIBUTE_ID: &str = "attribute_id";
/// Key of the filter sub-parameter carrying the raw value.
pub const VALUE: &str = "value";

/// Predicate strategy for [`AttributeFilter::add_where`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterOperator {
    #[default]
    Exact,
    Partial,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Exact => "exact",
            FilterOperator::Partial => "partial",
        }
    }
}

/// One advertised sub-parameter in [`AttributeFilter::description`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterParameterDescription {
    pub property: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
}

pub struct AttributeFilter {
    attributes: Arc<dyn IriConverter>,
    joins: Arc<dyn JoinExpander>,
    properties: HashSet<String>,
}

impl AttributeFilter {
    pub fn new<I, S>(
        attributes: Arc<dyn IriConverter>,
        joins: Arc<dyn JoinExpander>,
        properties: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes,
            joins,
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    /// Apply one filter request to the query under construction.
    ///
    /// Requests that cannot be applied safely are skipped: a non-object
    /// payload or a property this filter is not configured for is ignored
    /// outright, a payload missing one of its two keys is logged and
    /// ignored. Only attribute resolution and value coercion can fail.
    pub async fn apply_filter(
        &self,
        property: &str,
        raw_values: &Value,
        query: &mut QueryBuilder,
        names: &dyn QueryNameGenerator,
    ) -> Result<(), FilterError> {
        let Some(values) = raw_values.as_object() else {
            return Ok(());
        };
        if !self.properties.contains(property) {
            return Ok(());
        }

        // Each missing key logs its own diagnostic before the request is
        // dropped.
        let attribute_iri = values.get(ATTRIBUTE_ID);
        if attribute_iri.is_none() {
            warn!(property, missing = ATTRIBUTE_ID, "Invalid filter ignored");
        }
        let raw_value = values.get(VALUE);
        if raw_value.is_none() {
            warn!(property, missing = VALUE, "Invalid filter ignored");
        }
        let (Some(attribute_iri), Some(raw_value)) = (attribute_iri, raw_value) else {
            return Ok(());
        };
        // Present-but-non-string members skip without the diagnostic; only
        // absent keys log.
        let (Some(attribute_iri), Some(value)) = (attribute_iri.as_str(), raw_value.as_str())
        else {
            return Ok(());
        };

        let mut alias = query.root_alias().to_string();
        if let Some(joined) = self
            .joins
            .join_nested_property(property, &alias, query, names)
        {
            alias = joined;
        }

        self.add_where(
            query,
            names,
            &alias,
            property,
            attribute_iri,
            Some(value),
            FilterOperator::default(),
        )
        .await
    }

    /// Resolve the attribute, coerce the value by its type and append the
    /// predicate.
    ///
    /// The parameter name is consumed from the generator before any fallible
    /// step; consumption is observable through the shared generator and
    /// happens even when the predicate is never added.
    pub async fn add_where(
        &self,
        query: &mut QueryBuilder,
        names: &dyn QueryNameGenerator,
        alias: &str,
        field: &str,
        attribute_iri: &str,
        value: Option<&str>,
        operator: FilterOperator,
    ) -> Result<(), FilterError> {
        let parameter = names.generate_parameter_name(field);

        let attribute = self
            .attributes
            .attribute_from_iri(attribute_iri)
            .await
            .map_err(|source| FilterError::AttributeLookup {
                iri: attribute_iri.to_string(),
                source,
            })?;

        let coerced = normalize_value(value, attribute.kind())?;

        match operator {
            FilterOperator::Exact => {
                let column = attribute.kind().as_str();
                query
                    .and_where(format!("{alias}.{column} = :{parameter}"))
                    .set_parameter(parameter.clone(), coerced);
            }
            FilterOperator::Partial => {
                if coerced.is_null() {
                    debug!(field, "Partial filter value coerced to null, predicate skipped");
                    return Ok(());
                }
                query
                    .and_where(format!("{alias}.{field} > :{parameter}"))
                    .set_parameter(parameter.clone(), coerced);
            }
        }

        debug!(
            field,
            attribute = %attribute.code,
            parameter = %parameter,
            operator = operator.as_str(),
            "Attribute predicate applied"
        );
        Ok(())
    }

    /// Advertise the filter's sub-parameters for the host's schema
    /// generator: `property[attribute_id]` and `property[value]` per
    /// configured property, both optional strings.
    pub fn description(&self) -> BTreeMap<String, FilterParameterDescription> {
        let mut description = BTreeMap::new();
        for property in &self.properties {
            for key in [ATTRIBUTE_ID, VALUE] {
                description.insert(
                    format!("{property}[{key}]"),
                    FilterParameterDescription {
                        property: property.clone(),
                        kind: "string".to_string(),
                        required: false,
                    },
                );
            }
        }
        description
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

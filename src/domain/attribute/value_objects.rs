use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Attribute Value Objects
// ============================================================================

/// A product attribute as exposed by the host platform.
///
/// The plugin reads two things from it: the identity it was resolved under
/// and the declared type tag that drives value coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
}

impl Attribute {
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: AttributeType) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn kind(&self) -> &AttributeType {
        &self.kind
    }
}

/// Declared type tag of an attribute.
///
/// The tag set is open on the platform side (attribute types are registered
/// by string), so tags outside the well-known set are carried verbatim in
/// `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeType {
    Checkbox,
    Date,
    Datetime,
    Integer,
    Percent,
    Select,
    Other(String),
}

impl AttributeType {
    /// The tag string, doubling as the name of the attribute-value column
    /// an exact predicate targets.
    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::Checkbox => "checkbox",
            AttributeType::Date => "date",
            AttributeType::Datetime => "datetime",
            AttributeType::Integer => "integer",
            AttributeType::Percent => "percent",
            AttributeType::Select => "select",
            AttributeType::Other(tag) => tag,
        }
    }
}

impl From<&str> for AttributeType {
    fn from(tag: &str) -> Self {
        match tag {
            "checkbox" => AttributeType::Checkbox,
            "date" => AttributeType::Date,
            "datetime" => AttributeType::Datetime,
            "integer" => AttributeType::Integer,
            "percent" => AttributeType::Percent,
            "select" => AttributeType::Select,
            other => AttributeType::Other(other.to_string()),
        }
    }
}

impl From<String> for AttributeType {
    fn from(tag: String) -> Self {
        AttributeType::from(tag.as_str())
    }
}

impl From<AttributeType> for String {
    fn from(kind: AttributeType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

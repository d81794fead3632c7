use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A JSON Schema primitive type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

const STRING_FORMATS: &[&str] = &[
    "date",
    "date-time",
    "password",
    "byte",
    "binary",
    "email",
    "uuid",
    "uri",
    "hostname",
];
const INTEGER_FORMATS: &[&str] = &["int32", "int64"];
const NUMBER_FORMATS: &[&str] = &["float", "double"];

impl SchemaType {
    pub const ALL: [SchemaType; 7] = [
        SchemaType::String,
        SchemaType::Number,
        SchemaType::Integer,
        SchemaType::Boolean,
        SchemaType::Array,
        SchemaType::Object,
        SchemaType::Null,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::Null => "null",
        }
    }

    /// Look up a type keyword. Matching is exact: `"String"` is not a type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == keyword)
    }

    /// The formats registered for this type, or `None` when any format is accepted.
    pub fn formats(&self) -> Option<&'static [&'static str]> {
        match self {
            SchemaType::String => Some(STRING_FORMATS),
            SchemaType::Integer => Some(INTEGER_FORMATS),
            SchemaType::Number => Some(NUMBER_FORMATS),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated schema fragment: type, optional format, and the untyped
/// `default` / `enum` values carried through as found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSchema {
    #[serde(rename = "type")]
    pub(crate) schema_type: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) format: Option<String>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<Value>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub(crate) enum_values: Option<Vec<Value>>,
}

impl Default for TypeSchema {
    fn default() -> Self {
        Self {
            schema_type: SchemaType::String,
            format: None,
            default_value: None,
            enum_values: None,
        }
    }
}

impl TypeSchema {
    pub fn schema_type(&self) -> SchemaType {
        self.schema_type
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn enum_values(&self) -> Option<&[Value]> {
        self.enum_values.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(SchemaType::from_keyword("integer"), Some(SchemaType::Integer));
        assert_eq!(SchemaType::from_keyword("null"), Some(SchemaType::Null));
        assert_eq!(SchemaType::from_keyword("Integer"), None);
        assert_eq!(SchemaType::from_keyword("file"), None);
    }

    #[test]
    fn test_registered_formats() {
        assert!(SchemaType::String.formats().unwrap().contains(&"uuid"));
        assert_eq!(SchemaType::Integer.formats(), Some(INTEGER_FORMATS));
        assert_eq!(SchemaType::Number.formats(), Some(NUMBER_FORMATS));
        assert_eq!(SchemaType::Array.formats(), None);
        assert_eq!(SchemaType::Boolean.formats(), None);
    }

    #[test]
    fn test_default_is_plain_string() {
        let schema = TypeSchema::default();
        assert_eq!(schema.schema_type(), SchemaType::String);
        assert!(schema.format().is_none());
        assert!(schema.default_value().is_none());
        assert!(schema.enum_values().is_none());
    }
}

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::schema::{SchemaType, TypeSchema};

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "path" => Some(ParameterLocation::Path),
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "cookie" => Some(ParameterLocation::Cookie),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value type of a parameter. Same vocabulary as [`SchemaType`] minus `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl ParameterType {
    pub const ALL: [ParameterType; 6] = [
        ParameterType::String,
        ParameterType::Number,
        ParameterType::Integer,
        ParameterType::Boolean,
        ParameterType::Array,
        ParameterType::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Integer => "integer",
            ParameterType::Boolean => "boolean",
            ParameterType::Array => "array",
            ParameterType::Object => "object",
        }
    }

    pub fn from_schema_type(schema_type: SchemaType) -> Option<Self> {
        match schema_type {
            SchemaType::String => Some(ParameterType::String),
            SchemaType::Number => Some(ParameterType::Number),
            SchemaType::Integer => Some(ParameterType::Integer),
            SchemaType::Boolean => Some(ParameterType::Boolean),
            SchemaType::Array => Some(ParameterType::Array),
            SchemaType::Object => Some(ParameterType::Object),
            SchemaType::Null => None,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint input, normalized from a raw parameter object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) required: bool,
    #[serde(rename = "type")]
    pub(crate) param_type: ParameterType,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<Value>,
    pub(crate) location: ParameterLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schema: Option<TypeSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) example: Option<Value>,
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn param_type(&self) -> ParameterType {
        self.param_type
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn location(&self) -> ParameterLocation {
        self.location
    }

    pub fn schema(&self) -> Option<&TypeSchema> {
        self.schema.as_ref()
    }

    pub fn example(&self) -> Option<&Value> {
        self.example.as_ref()
    }
}

use thiserror::Error;

/// Failure to decode the source text into a document tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file format '{0}': expected a .yaml, .yml or .json file")]
    UnsupportedFormat(String),

    #[error("document root must be a mapping")]
    NotAMapping,

    #[error("mapping keys must be scalars")]
    NonScalarKey,
}

/// The top level of the document is missing a required field, has a field of
/// the wrong type, or declares an OpenAPI version other than 3.x.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentShapeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("unsupported OpenAPI version {0}: only OpenAPI 3.x specifications are supported")]
    UnsupportedVersion(String),

    #[error("info.title must be a non-empty string")]
    MissingTitle,
}

/// A type-schema fragment uses a type or format outside the supported vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported schema type {value}: expected one of {allowed}")]
    Type { value: String, allowed: String },

    #[error("format '{format}' is not valid for type '{schema_type}'")]
    Format { format: String, schema_type: String },
}

/// Failure while turning path items into operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("invalid parameter: {0}")]
    ParameterShape(String),

    #[error("invalid HTTP status code '{0}': expected an integer between 100 and 599")]
    InvalidStatusCode(String),

    #[error("invalid operation {method} {path}: {reason}")]
    OperationShape {
        path: String,
        method: String,
        reason: String,
    },

    #[error("operation name '{name}' of {second} collides with {first}")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },
}

/// Any failure of [`crate::load`].
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid document: {0}")]
    Document(#[from] DocumentShapeError),

    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
}

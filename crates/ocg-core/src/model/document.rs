use serde::Serialize;
use serde_json::{Map, Value};

use super::operation::Operation;
use crate::error::DocumentShapeError;

/// A validated OpenAPI 3.x document.
///
/// Construction only checks the top-level shape. Operations are produced by a
/// separate extraction pass over [`Document::raw_paths`] and attached with
/// [`Document::with_operations`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    version: String,
    info: Map<String, Value>,
    raw_paths: Map<String, Value>,
    operations: Vec<Operation>,
}

impl Document {
    /// Validate the top level of a decoded document.
    pub fn from_value(value: Value) -> Result<Self, DocumentShapeError> {
        let Value::Object(mut root) = value else {
            return Err(DocumentShapeError::WrongType {
                field: "document",
                expected: "a mapping",
            });
        };

        let version = match root.remove("openapi") {
            Some(Value::String(v)) => v,
            Some(_) => {
                return Err(DocumentShapeError::WrongType {
                    field: "openapi",
                    expected: "a string",
                });
            }
            None => return Err(DocumentShapeError::MissingField("openapi")),
        };
        if !version.starts_with("3.") {
            return Err(DocumentShapeError::UnsupportedVersion(version));
        }

        let info = match root.remove("info") {
            Some(Value::Object(info)) => info,
            Some(_) => {
                return Err(DocumentShapeError::WrongType {
                    field: "info",
                    expected: "a mapping",
                });
            }
            None => return Err(DocumentShapeError::MissingField("info")),
        };
        match info.get("title") {
            Some(Value::String(title)) if !title.trim().is_empty() => {}
            _ => return Err(DocumentShapeError::MissingTitle),
        }

        let raw_paths = match root.remove("paths") {
            Some(Value::Object(paths)) => paths,
            Some(_) => {
                return Err(DocumentShapeError::WrongType {
                    field: "paths",
                    expected: "a mapping",
                });
            }
            None => return Err(DocumentShapeError::MissingField("paths")),
        };

        Ok(Self {
            version,
            info,
            raw_paths,
            operations: Vec::new(),
        })
    }

    /// Attach the result of an extraction pass, replacing any operations
    /// attached before.
    pub fn with_operations(self, operations: Vec<Operation>) -> Self {
        Self { operations, ..self }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn info(&self) -> &Map<String, Value> {
        &self.info
    }

    pub fn title(&self) -> &str {
        self.info
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// `info.version`, the version of the described API.
    pub fn api_version(&self) -> Option<&str> {
        self.info.get("version").and_then(Value::as_str)
    }

    /// The `paths` mapping exactly as decoded.
    pub fn raw_paths(&self) -> &Map<String, Value> {
        &self.raw_paths
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn operations_by_tag(&self, tag: &str) -> Vec<&Operation> {
        self.operations.iter().filter(|op| op.has_tag(tag)).collect()
    }
}

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::parameter::Parameter;
use super::schema::TypeSchema;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// The methods the extractor visits. `head` and `options` are representable
    /// but never extracted.
    pub const EXTRACTED: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }

    /// Case-insensitive lookup of a method keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            _ => None,
        }
    }

    pub fn is_extracted(&self) -> bool {
        Self::EXTRACTED.contains(self)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One status-coded response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    pub(crate) status_code: String,
    pub(crate) description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schema: Option<TypeSchema>,
}

impl OperationResponse {
    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn schema(&self) -> Option<&TypeSchema> {
        self.schema.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.status_code.starts_with('2')
    }
}

/// One (path, method) endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub(crate) method: HttpMethod,
    pub(crate) path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) operation_id: Option<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) summary: String,
    pub(crate) description: String,
    pub(crate) name: String,
    pub(crate) path_parameters: Vec<Parameter>,
    pub(crate) query_parameters: Vec<Parameter>,
    pub(crate) body_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) body_schema: Option<TypeSchema>,
    pub(crate) responses: IndexMap<String, OperationResponse>,
    pub(crate) deprecated: bool,
}

impl Operation {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn operation_id(&self) -> Option<&str> {
        self.operation_id.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Identifier derived from the path template. Not unique across operations
    /// unless extraction ran with a non-default collision policy.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path_parameters(&self) -> &[Parameter] {
        &self.path_parameters
    }

    pub fn query_parameters(&self) -> &[Parameter] {
        &self.query_parameters
    }

    pub fn body_required(&self) -> bool {
        self.body_required
    }

    pub fn body_schema(&self) -> Option<&TypeSchema> {
        self.body_schema.as_ref()
    }

    pub fn responses(&self) -> &IndexMap<String, OperationResponse> {
        &self.responses
    }

    pub fn deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The first response, in document order, whose status code starts with `2`.
    pub fn successful_response(&self) -> Option<&OperationResponse> {
        self.responses.values().find(|r| r.is_success())
    }

    pub fn has_json_response(&self) -> bool {
        self.successful_response()
            .and_then(|r| r.content_type())
            .is_some_and(|ct| ct.contains("application/json"))
    }

    /// Required path parameters followed by required query parameters.
    pub fn required_parameters(&self) -> Vec<&Parameter> {
        self.path_parameters
            .iter()
            .chain(&self.query_parameters)
            .filter(|p| p.required)
            .collect()
    }
}

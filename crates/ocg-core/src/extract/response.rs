use serde_json::{Map, Value};

use super::schema::validate_schema;
use crate::error::ExtractError;
use crate::model::OperationResponse;

/// Normalize the response declared under `status_code`.
///
/// Only the first content type, in document order, is examined.
pub fn normalize_response(
    status_code: &str,
    raw: &Map<String, Value>,
) -> Result<OperationResponse, ExtractError> {
    validate_status_code(status_code)?;

    let first_content = raw
        .get("content")
        .and_then(Value::as_object)
        .and_then(|content| content.iter().next());

    let (content_type, schema) = match first_content {
        Some((content_type, media)) => {
            let schema = match media.get("schema") {
                None | Some(Value::Null) => None,
                Some(raw_schema) => Some(validate_schema(raw_schema)?),
            };
            (Some(content_type.clone()), schema)
        }
        None => (None, None),
    };

    Ok(OperationResponse {
        status_code: status_code.to_string(),
        description: raw
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        content_type,
        schema,
    })
}

/// A status code must be a plain decimal integer in `100..=599`. Ranges such as
/// `2XX` and the `default` key are rejected.
pub fn validate_status_code(status_code: &str) -> Result<u16, ExtractError> {
    let invalid = || ExtractError::InvalidStatusCode(status_code.to_string());
    if status_code.is_empty() || !status_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match status_code.parse::<u16>() {
        Ok(code) if (100..=599).contains(&code) => Ok(code),
        _ => Err(invalid()),
    }
}

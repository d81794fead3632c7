use serde_json::Value;

use super::schema::{allowed_types, validate_schema};
use crate::error::{ExtractError, SchemaError};
use crate::model::{Parameter, ParameterLocation, ParameterType};

/// Normalize one raw parameter object.
///
/// `name` and `in` are mandatory. The parameter type and default come from the
/// nested schema (a plain string schema when absent); a `default` set directly
/// on the parameter object wins over the schema's.
pub fn normalize_parameter(raw: &Value) -> Result<Parameter, ExtractError> {
    let Value::Object(fields) = raw else {
        return Err(ExtractError::ParameterShape(format!(
            "parameter must be a mapping, found {raw}"
        )));
    };

    let name = match fields.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        _ => {
            return Err(ExtractError::ParameterShape(
                "parameter is missing a non-empty 'name'".to_string(),
            ));
        }
    };

    let location = match fields.get("in") {
        Some(Value::String(keyword)) => {
            ParameterLocation::from_keyword(keyword).ok_or_else(|| {
                ExtractError::ParameterShape(format!(
                    "parameter '{name}' has unsupported location '{keyword}': expected one of path, query, header, cookie"
                ))
            })?
        }
        _ => {
            return Err(ExtractError::ParameterShape(format!(
                "parameter '{name}' is missing 'in'"
            )));
        }
    };

    let schema = match fields.get("schema") {
        None | Some(Value::Null) => None,
        Some(raw_schema) => Some(validate_schema(raw_schema)?),
    };
    let resolved = schema.clone().unwrap_or_default();

    let param_type =
        ParameterType::from_schema_type(resolved.schema_type()).ok_or_else(|| SchemaError::Type {
            value: format!("'{}' for parameter '{name}'", resolved.schema_type()),
            allowed: allowed_types(&ParameterType::ALL),
        })?;

    let default_value = fields
        .get("default")
        .cloned()
        .or_else(|| resolved.default_value().cloned());

    Ok(Parameter {
        name,
        description: fields
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        required: fields
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        param_type,
        default_value,
        location,
        schema,
        example: fields.get("example").cloned(),
    })
}

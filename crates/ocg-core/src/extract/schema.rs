use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::model::{SchemaType, TypeSchema};

/// Validate one raw schema fragment.
///
/// Only `type`, `format`, `default` and `enum` are read; every other key is
/// ignored. `default` and `enum` are carried through without checking them
/// against the type.
pub fn validate_schema(raw: &Value) -> Result<TypeSchema, SchemaError> {
    let Value::Object(fields) = raw else {
        return Err(SchemaError::Type {
            value: raw.to_string(),
            allowed: allowed_types(&SchemaType::ALL),
        });
    };
    validate_schema_map(fields)
}

pub(crate) fn validate_schema_map(fields: &Map<String, Value>) -> Result<TypeSchema, SchemaError> {
    let schema_type = match fields.get("type") {
        None | Some(Value::Null) => SchemaType::String,
        Some(Value::String(keyword)) => {
            SchemaType::from_keyword(keyword).ok_or_else(|| SchemaError::Type {
                value: format!("'{keyword}'"),
                allowed: allowed_types(&SchemaType::ALL),
            })?
        }
        Some(other) => {
            return Err(SchemaError::Type {
                value: other.to_string(),
                allowed: allowed_types(&SchemaType::ALL),
            });
        }
    };

    let format = match fields.get("format") {
        None | Some(Value::Null) => None,
        Some(Value::String(format)) => Some(check_format(schema_type, format)?),
        Some(other) => {
            return Err(SchemaError::Format {
                format: other.to_string(),
                schema_type: schema_type.to_string(),
            });
        }
    };

    let enum_values = match fields.get("enum") {
        Some(Value::Array(values)) => Some(values.clone()),
        _ => None,
    };

    Ok(TypeSchema {
        schema_type,
        format,
        default_value: fields.get("default").cloned(),
        enum_values,
    })
}

/// Check `format` against the set registered for `schema_type`. Types without
/// a registered set accept any format.
pub fn check_format(schema_type: SchemaType, format: &str) -> Result<String, SchemaError> {
    match schema_type.formats() {
        Some(allowed) if !allowed.contains(&format) => Err(SchemaError::Format {
            format: format.to_string(),
            schema_type: schema_type.to_string(),
        }),
        _ => Ok(format.to_string()),
    }
}

pub(crate) fn allowed_types<T: std::fmt::Display>(types: &[T]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

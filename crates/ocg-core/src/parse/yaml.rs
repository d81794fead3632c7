use serde_json::{Map, Number, Value};
use serde_yaml_ng::Value as Yaml;

use crate::error::ParseError;

/// Convert a YAML tree into the JSON data model.
///
/// Mapping order is kept. Scalar keys that are not strings (`200:`, `true:`)
/// become their string form; tags are dropped.
pub(crate) fn yaml_to_json(value: Yaml) -> Result<Value, ParseError> {
    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => number_to_json(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut out = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                out.insert(key_to_string(key)?, yaml_to_json(value)?);
            }
            Value::Object(out)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn number_to_json(n: &serde_yaml_ng::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn key_to_string(key: Yaml) -> Result<String, ParseError> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => key_to_string(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => Err(ParseError::NonScalarKey),
    }
}

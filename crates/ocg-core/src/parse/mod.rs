mod yaml;

use std::path::Path;

use serde_json::Value;

use crate::error::ParseError;

/// Serialization format of a source document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// `.yaml` and `.yml` are YAML, `.json` is JSON; anything else is rejected.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(SourceFormat::Yaml),
            Some("json") => Ok(SourceFormat::Json),
            _ => Err(ParseError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn parse(&self, input: &str) -> Result<Value, ParseError> {
        match self {
            SourceFormat::Yaml => from_yaml(input),
            SourceFormat::Json => from_json(input),
        }
    }
}

/// Decode a YAML document into a raw document tree.
pub fn from_yaml(input: &str) -> Result<Value, ParseError> {
    let tree: serde_yaml_ng::Value = serde_yaml_ng::from_str(input)?;
    ensure_mapping(yaml::yaml_to_json(tree)?)
}

/// Decode a JSON document into a raw document tree.
pub fn from_json(input: &str) -> Result<Value, ParseError> {
    ensure_mapping(serde_json::from_str(input)?)
}

fn ensure_mapping(value: Value) -> Result<Value, ParseError> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(ParseError::NotAMapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("api/openapi.yaml")).unwrap(),
            SourceFormat::Yaml
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("openapi.yml")).unwrap(),
            SourceFormat::Yaml
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("openapi.json")).unwrap(),
            SourceFormat::Json
        );
        for bad in ["spec.txt", "spec", "spec.yaml.bak"] {
            assert!(matches!(
                SourceFormat::from_path(Path::new(bad)),
                Err(ParseError::UnsupportedFormat(_))
            ));
        }
    }

    #[test]
    fn test_root_must_be_mapping() {
        assert!(matches!(from_yaml("- a\n- b\n"), Err(ParseError::NotAMapping)));
        assert!(matches!(from_json("[1, 2]"), Err(ParseError::NotAMapping)));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(from_json("{"), Err(ParseError::Json(_))));
        assert!(matches!(from_yaml("a: [1, 2"), Err(ParseError::Yaml(_))));
    }
}

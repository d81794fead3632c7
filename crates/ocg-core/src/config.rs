use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.ocg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcgConfig {
    pub input: String,
    pub output: String,
    /// Directory holding a `cli_template.jinja2` that replaces the built-in template.
    pub template_path: Option<String>,
    pub client: ClientConfig,
    pub packaging: PackagingConfig,
    pub naming: NamingConfig,
}

impl Default for OcgConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "generated".to_string(),
            template_path: None,
            client: ClientConfig::default(),
            packaging: PackagingConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

/// The external Python client generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub command: String,
    pub enabled: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            command: "openapi-python-client".to_string(),
            enabled: true,
        }
    }
}

/// Fix-ups applied to the generated client package.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackagingConfig {
    /// Version requirement written for `click` in `pyproject.toml`.
    pub click_requirement: String,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            click_requirement: "^8.1.7".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub collisions: NameCollisionPolicy,
}

/// What to do when two operations derive the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCollisionPolicy {
    /// Keep duplicates. Consumers keyed by name see the last one.
    #[default]
    Allow,
    /// Fail extraction on the first duplicate.
    Reject,
    /// Append `_2`, `_3`, ... to later duplicates in document order.
    Suffix,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".ocg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OcgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OcgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# ocg configuration
input: openapi.yaml
output: generated
# template_path: templates   # directory containing cli_template.jinja2

client:
  command: openapi-python-client
  enabled: true       # set to false to render cli.py against an existing client

packaging:
  click_requirement: "^8.1.7"

naming:
  collisions: allow   # allow | reject | suffix
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OcgConfig::default();
        assert_eq!(config.input, "openapi.yaml");
        assert_eq!(config.output, "generated");
        assert!(config.template_path.is_none());
        assert_eq!(config.client.command, "openapi-python-client");
        assert!(config.client.enabled);
        assert_eq!(config.packaging.click_requirement, "^8.1.7");
        assert_eq!(config.naming.collisions, NameCollisionPolicy::Allow);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: spec.json
output: out
template_path: templates
client:
  command: /opt/bin/openapi-python-client
  enabled: false
packaging:
  click_requirement: ">=8"
naming:
  collisions: suffix
"#;
        let config: OcgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "spec.json");
        assert_eq!(config.output, "out");
        assert_eq!(config.template_path.as_deref(), Some("templates"));
        assert_eq!(config.client.command, "/opt/bin/openapi-python-client");
        assert!(!config.client.enabled);
        assert_eq!(config.packaging.click_requirement, ">=8");
        assert_eq!(config.naming.collisions, NameCollisionPolicy::Suffix);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: OcgConfig = serde_yaml_ng::from_str("input: api.yaml\n").unwrap();
        assert_eq!(config.input, "api.yaml");
        assert_eq!(config.output, "generated");
        assert!(config.client.enabled);
    }

    #[test]
    fn test_default_content_parses() {
        let config: OcgConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, "openapi.yaml");
        assert_eq!(config.naming.collisions, NameCollisionPolicy::Allow);
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config(Path::new("definitely/not/here.yaml")).unwrap().is_none());
    }
}

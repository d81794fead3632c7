use std::fs;
use std::path::PathBuf;

use log::debug;
use ocg_core::model::Document;
use ocg_core::{CodeGenerator, GeneratedFile};
use thiserror::Error;

use crate::emitters;

/// File name looked up inside a custom template directory.
pub const CUSTOM_TEMPLATE_NAME: &str = "cli_template.jinja2";

/// Name of the rendered module.
pub const OUTPUT_FILE_NAME: &str = "cli.py";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to load template {path}: {source}")]
    TemplateLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render CLI code: {0}")]
    Render(#[from] minijinja::Error),
}

/// Options for rendering `cli.py`.
#[derive(Debug, Clone)]
pub struct ClickConfig {
    /// Importable name of the generated Python client package.
    pub client_module: String,
    /// Directory containing a `cli_template.jinja2` that replaces the built-in template.
    pub template_dir: Option<PathBuf>,
}

/// Renders a Click command group with one command per extracted operation.
pub struct ClickCliGenerator;

impl CodeGenerator for ClickCliGenerator {
    type Config = ClickConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        document: &Document,
        config: &ClickConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let custom = match &config.template_dir {
            Some(dir) => {
                let path = dir.join(CUSTOM_TEMPLATE_NAME);
                debug!("using template {}", path.display());
                let source = fs::read_to_string(&path)
                    .map_err(|source| GeneratorError::TemplateLoad { path, source })?;
                Some(source)
            }
            None => None,
        };

        let content = emitters::cli::emit_cli(document, &config.client_module, custom.as_deref())?;

        Ok(vec![GeneratedFile {
            path: OUTPUT_FILE_NAME.to_string(),
            content,
        }])
    }
}

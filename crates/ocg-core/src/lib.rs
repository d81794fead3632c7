pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod parse;

use error::CoreError;
use extract::ExtractOptions;
use model::Document;
use parse::SourceFormat;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from an extracted document.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        document: &Document,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}

/// Decode, validate and extract in one go, returning the document with its
/// operations attached.
pub fn load(
    input: &str,
    format: SourceFormat,
    options: &ExtractOptions,
) -> Result<Document, CoreError> {
    let raw = format.parse(input)?;
    let document = Document::from_value(raw)?;
    let operations = extract::extract_operations_with_options(document.raw_paths(), options)?;
    Ok(document.with_operations(operations))
}

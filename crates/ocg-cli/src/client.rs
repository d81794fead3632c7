use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use log::info;

/// Run the external Python client generator:
/// `<command> generate --path <spec> --output-path <output> --overwrite`.
pub fn generate_client(command: &str, spec: &Path, output: &Path) -> Result<()> {
    info!(
        "running {command} generate --path {} --output-path {} --overwrite",
        spec.display(),
        output.display()
    );

    let status = Command::new(command)
        .arg("generate")
        .arg("--path")
        .arg(spec)
        .arg("--output-path")
        .arg(output)
        .arg("--overwrite")
        .status()
        .with_context(|| {
            format!("failed to run {command}: install it or pass --skip-client")
        })?;

    if !status.success() {
        bail!("failed to generate client: {command} exited with {status}");
    }
    Ok(())
}

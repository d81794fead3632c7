use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use heck::ToSnakeCase;
use log::{debug, warn};

/// Content written to missing `__init__.py` files.
pub const INIT_MARKER: &str = "# This file makes this directory a package.";

const POETRY_DEPENDENCIES: &str = "[tool.poetry.dependencies]";

/// Add `click = "<requirement>"` under `[tool.poetry.dependencies]` in
/// `<output>/pyproject.toml`. Returns whether the file changed.
pub fn add_click_dependency(output: &Path, requirement: &str) -> Result<bool> {
    let path = output.join("pyproject.toml");
    if !path.exists() {
        debug!("no {} to update", path.display());
        return Ok(false);
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    if has_click_dependency(&content) {
        return Ok(false);
    }

    let mut updated = String::with_capacity(content.len() + 32);
    let mut inserted = false;
    for line in content.split_inclusive('\n') {
        updated.push_str(line);
        if !inserted && line.trim_end() == POETRY_DEPENDENCIES {
            if !line.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(&format!("click = \"{requirement}\"\n"));
            inserted = true;
        }
    }

    if !inserted {
        warn!(
            "{} has no {POETRY_DEPENDENCIES} section; add click manually",
            path.display()
        );
        return Ok(false);
    }

    fs::write(&path, updated).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

fn has_click_dependency(content: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim_start();
        let rest = line
            .strip_prefix("click")
            .or_else(|| line.strip_prefix("\"click\""));
        rest.is_some_and(|r| r.trim_start().starts_with('='))
    })
}

/// The first package directory the client generator left in `output`, in
/// name order. Hidden directories and `__pycache__` are ignored.
pub fn find_client_package(output: &Path) -> Result<Option<String>> {
    let entries = fs::read_dir(output)
        .with_context(|| format!("failed to list {}", output.display()))?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", output.display()))?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name == "__pycache__" {
            continue;
        }
        packages.push(name);
    }

    packages.sort();
    Ok(packages.into_iter().next())
}

/// The package name the client generator derives from the API title.
pub fn default_client_module(title: &str) -> String {
    format!("{}_client", title.to_snake_case())
}

/// Write `__init__.py` into `output` and into `output/<package>` when that
/// directory exists. Existing files are left alone.
pub fn write_init_markers(output: &Path, package: &str) -> Result<()> {
    let package_dir = output.join(package);
    let mut dirs = vec![output];
    if package_dir.is_dir() {
        dirs.push(&package_dir);
    }

    for dir in dirs {
        let init = dir.join("__init__.py");
        if init.exists() {
            continue;
        }
        fs::write(&init, INIT_MARKER)
            .with_context(|| format!("failed to write {}", init.display()))?;
        debug!("wrote {}", init.display());
    }
    Ok(())
}

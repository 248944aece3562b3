//! pyproject.toml reading

use super::types::{BuildSystemDeclaration, BUILD_SYSTEM_KEY, PYPROJECT_FILE};
use crate::error::ResolveError;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of pyproject.toml inside a source directory. Existence is not checked.
pub fn pyproject_path(source_dir: &Path) -> PathBuf {
    source_dir.join(PYPROJECT_FILE)
}

/// Read the `[build-system]` table of a pyproject.toml file.
///
/// Returns `Ok(None)` when the document has no such table. Syntax errors are
/// returned as [`ResolveError::Parse`] and never recovered here.
pub fn read_build_system(
    fs: &dyn FileSystem,
    path: &Path,
) -> Result<Option<BuildSystemDeclaration>, ResolveError> {
    let content = fs.read_to_string(path).map_err(|e| ResolveError::Read {
        path: path.to_path_buf(),
        message: format!("{:#}", e),
    })?;

    parse_build_system(&content, path)
}

pub(crate) fn parse_build_system(
    content: &str,
    path: &Path,
) -> Result<Option<BuildSystemDeclaration>, ResolveError> {
    let mut document: toml::Table = toml::from_str(content).map_err(|e| ResolveError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match document.remove(BUILD_SYSTEM_KEY) {
        None => {
            debug!(path = %path.display(), "No [build-system] table");
            Ok(None)
        }
        Some(toml::Value::Table(table)) => {
            debug!(path = %path.display(), keys = table.len(), "Found [build-system] table");
            Ok(Some(BuildSystemDeclaration::new(table)))
        }
        Some(_) => Err(ResolveError::InvalidBuildSystem {
            path: path.to_path_buf(),
        }),
    }
}

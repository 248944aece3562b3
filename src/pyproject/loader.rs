//! Entry point: inspect a source directory and resolve its build policy

use super::reader::{pyproject_path, read_build_system};
use super::resolver::resolve;
use super::types::{IsolationRequest, ResolutionInput, ResolutionOutput, SETUP_PY_FILE};
use crate::error::ResolveError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::report::{DiagnosticHandler, LoggingHandler};
use std::path::Path;
use tracing::debug;

/// Load pyproject.toml from `source_dir` (if present) and resolve whether the
/// package is built through PEP 517 or through `setup.py`.
///
/// # Arguments
///
/// * `isolation` - PEP 517 processing requested by the caller, already normalized
/// * `editable` - whether an editable install was requested
/// * `source_dir` - directory holding pyproject.toml and/or setup.py
/// * `package` - display name used in diagnostics
pub fn load_pyproject(
    fs: &dyn FileSystem,
    handler: &dyn DiagnosticHandler,
    isolation: IsolationRequest,
    editable: bool,
    source_dir: &Path,
    package: &str,
) -> Result<ResolutionOutput, ResolveError> {
    let pyproject = pyproject_path(source_dir);
    let setup_py = fs.join(source_dir, SETUP_PY_FILE);

    let has_pyproject = fs.is_file(&pyproject);
    let has_setup_py = fs.is_file(&setup_py);
    debug!(
        package,
        source_dir = %source_dir.display(),
        has_pyproject,
        has_setup_py,
        "Inspecting source directory"
    );

    let build_system = if has_pyproject {
        read_build_system(fs, &pyproject)?
    } else {
        None
    };

    let input = ResolutionInput {
        build_system,
        has_pyproject,
        has_setup_py,
        isolation,
        editable,
        package_name: package.to_string(),
    };

    resolve(&input, handler).map_err(ResolveError::from)
}

/// [`load_pyproject`] against the real file system, reporting through `tracing`.
pub fn load_pyproject_from_disk(
    isolation: IsolationRequest,
    editable: bool,
    source_dir: &Path,
    package: &str,
) -> Result<ResolutionOutput, ResolveError> {
    load_pyproject(
        &RealFileSystem::new(),
        &LoggingHandler,
        isolation,
        editable,
        source_dir,
        package,
    )
}

//! Decide between PEP 517 isolated builds and legacy `setup.py` builds.
//!
//! The decision is an ordered table; the first matching rule wins:
//!
//! 1. editable + isolation explicitly enabled: error
//! 2. pyproject.toml without setup.py: isolation is forced
//! 3. a declared `build-backend`: isolation is implied
//! 4. isolation unspecified: pyproject.toml presence decides
//! 5. otherwise the caller's explicit choice stands
//!
//! Rules 2-4 each carry their own diagnostic, so they are kept as separate
//! branches rather than merged.

use super::requires::{declared_backend, extract_requires};
use super::types::{
    default_requires, IsolationRequest, ResolutionInput, ResolutionOutput, BUILD_BACKEND_KEY,
    DEFAULT_BACKEND,
};
use crate::error::{ConfigurationError, EditableReason, EditableUnsupportedError};
use crate::report::{DiagnosticEvent, DiagnosticHandler};
use tracing::debug;

fn editable_error(package: &str, reason: EditableReason) -> ConfigurationError {
    EditableUnsupportedError::new(package, reason).into()
}

fn editable_fallback_message(package: &str) -> String {
    format!(
        "Installing '{}' in editable mode, which is not supported for \
         pyproject.toml-style projects: this project is pyproject.toml-style \
         because it has a pyproject.toml file and a \"build-backend\" key for the \
         [build-system] table, but editable mode is undefined for \
         pyproject.toml-style projects. Proceeding with the legacy setup.py build \
         because PEP 517 processing was explicitly disabled. See PEP 517 for \
         details on pyproject.toml-style projects.",
        package
    )
}

/// Run the decision table and settle on isolated (`true`) or legacy (`false`).
fn decide_isolation(
    input: &ResolutionInput,
    handler: &dyn DiagnosticHandler,
) -> Result<bool, ConfigurationError> {
    let package = input.package_name.as_str();
    let isolation = input.isolation;

    // 1. An explicit request always wins over the file layout.
    if input.editable && isolation == IsolationRequest::Enabled {
        return Err(editable_error(package, EditableReason::ExplicitlyRequested));
    }

    // 2. Nothing to fall back to.
    if input.has_pyproject && !input.has_setup_py {
        if isolation == IsolationRequest::Disabled {
            return Err(ConfigurationError::MissingSetupPy {
                package: package.to_string(),
            });
        }
        if input.editable {
            return Err(editable_error(package, EditableReason::NoSetupPy));
        }
        return Ok(true);
    }

    // 3. A named backend only works through PEP 517. Presence of the key is
    // enough here; its value is checked once an isolated build is chosen.
    if let Some(backend) = input
        .build_system
        .as_ref()
        .and_then(|b| b.get(BUILD_BACKEND_KEY))
    {
        if input.editable {
            if isolation == IsolationRequest::Unspecified {
                return Err(editable_error(package, EditableReason::BackendDeclared));
            }
            debug_assert_eq!(isolation, IsolationRequest::Disabled);
            handler.on_diagnostic(&DiagnosticEvent::EditableLegacyFallback {
                package: package.to_string(),
                message: editable_fallback_message(package),
            });
            return Ok(false);
        }
        if isolation == IsolationRequest::Disabled {
            return Err(ConfigurationError::BackendDeclared {
                package: package.to_string(),
                backend: match backend.as_str() {
                    Some(name) => name.to_string(),
                    None => backend.to_string(),
                },
            });
        }
        return Ok(true);
    }

    // 4. No opinion from the caller: pyproject.toml presence decides.
    // 5. Otherwise keep the caller's explicit value.
    match isolation.explicit() {
        Some(explicit) => Ok(explicit),
        None if input.has_pyproject && input.editable => {
            Err(editable_error(package, EditableReason::PyprojectPresent))
        }
        None => Ok(input.has_pyproject),
    }
}

/// Resolve how a package is built and which build requirements it needs.
///
/// Requirement validation runs even when the legacy path is chosen, so a
/// malformed `[build-system]` table is always reported.
pub fn resolve(
    input: &ResolutionInput,
    handler: &dyn DiagnosticHandler,
) -> Result<ResolutionOutput, ConfigurationError> {
    let package = input.package_name.as_str();
    let isolated = decide_isolation(input, handler)?;
    let requires = extract_requires(input.build_system.as_ref(), package)?;

    let output = if !isolated {
        ResolutionOutput::legacy(requires)
    } else {
        match input.build_system.as_ref() {
            // No table at all: assume the setuptools legacy backend together
            // with the requirements it needs.
            None => ResolutionOutput::isolated(Some(default_requires()), DEFAULT_BACKEND, vec![]),
            Some(build_system) => match declared_backend(Some(build_system), package)? {
                Some(backend) => ResolutionOutput::isolated(requires, backend, vec![]),
                // Declared requirements may not include setuptools or wheel;
                // they are checked once the build environment exists.
                None => ResolutionOutput::isolated(requires, DEFAULT_BACKEND, default_requires()),
            },
        }
    };

    debug!(
        package,
        isolated,
        requires = ?output.requires,
        "Build policy decided"
    );
    handler.on_diagnostic(&DiagnosticEvent::Resolved {
        package: package.to_string(),
        isolated: output.is_isolated(),
        backend: output.backend().map(str::to_string),
    });

    Ok(output)
}

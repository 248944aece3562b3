//! PEP 518 validation of the `[build-system]` table

use super::types::{BuildSystemDeclaration, BUILD_BACKEND_KEY, REQUIRES_KEY};
use crate::error::{ConfigurationError, Pep518Violation};

fn non_compliant(package: &str, reason: Pep518Violation) -> ConfigurationError {
    ConfigurationError::NonCompliant {
        package: package.to_string(),
        reason,
    }
}

/// Extract `build-system.requires`.
///
/// No declaration yields `Ok(None)`. A declaration must carry `requires` as
/// an array of strings; the list is returned verbatim.
pub fn extract_requires(
    build_system: Option<&BuildSystemDeclaration>,
    package: &str,
) -> Result<Option<Vec<String>>, ConfigurationError> {
    let Some(build_system) = build_system else {
        return Ok(None);
    };

    let requires = build_system
        .get(REQUIRES_KEY)
        .ok_or_else(|| non_compliant(package, Pep518Violation::MissingRequires))?;

    let items = requires
        .as_array()
        .ok_or_else(|| non_compliant(package, Pep518Violation::RequiresNotListOfStrings))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| non_compliant(package, Pep518Violation::RequiresNotListOfStrings))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Extract `build-system.build-backend`, if declared.
///
/// A declared backend must be a non-empty string.
pub fn declared_backend<'a>(
    build_system: Option<&'a BuildSystemDeclaration>,
    package: &str,
) -> Result<Option<&'a str>, ConfigurationError> {
    let Some(value) = build_system.and_then(|b| b.get(BUILD_BACKEND_KEY)) else {
        return Ok(None);
    };

    match value.as_str() {
        Some("") => Err(non_compliant(package, Pep518Violation::EmptyBackend)),
        Some(backend) => Ok(Some(backend)),
        None => Err(non_compliant(package, Pep518Violation::BackendNotString)),
    }
}

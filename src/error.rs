//! Error taxonomy for build policy resolution

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the loader: file access, document syntax and
/// configuration violations.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid {}: 'build-system' must be a table", .path.display())]
    InvalidBuildSystem { path: PathBuf },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl ResolveError {
    pub fn is_editable_unsupported(&self) -> bool {
        matches!(self, ResolveError::Configuration(e) if e.is_editable_unsupported())
    }
}

/// A project layout or build-system table that cannot be built as requested
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{package} has a pyproject.toml file that does not comply with PEP 518: {reason}")]
    NonCompliant {
        package: String,
        reason: Pep518Violation,
    },

    #[error(
        "Disabling PEP 517 processing is invalid for '{package}': project does not have a setup.py"
    )]
    MissingSetupPy { package: String },

    #[error(
        "Disabling PEP 517 processing is invalid for '{package}': project specifies a build backend of {backend} in pyproject.toml"
    )]
    BackendDeclared { package: String, backend: String },

    #[error(transparent)]
    EditableUnsupported(#[from] EditableUnsupportedError),
}

impl ConfigurationError {
    pub fn is_editable_unsupported(&self) -> bool {
        matches!(self, ConfigurationError::EditableUnsupported(_))
    }

    pub fn package(&self) -> &str {
        match self {
            ConfigurationError::NonCompliant { package, .. }
            | ConfigurationError::MissingSetupPy { package }
            | ConfigurationError::BackendDeclared { package, .. } => package,
            ConfigurationError::EditableUnsupported(e) => &e.package,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pep518Violation {
    MissingRequires,
    RequiresNotListOfStrings,
    BackendNotString,
    EmptyBackend,
}

impl fmt::Display for Pep518Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pep518Violation::MissingRequires => write!(
                f,
                "it has a 'build-system' table but not 'build-system.requires' which is mandatory in the table"
            ),
            Pep518Violation::RequiresNotListOfStrings => {
                write!(f, "'build-system.requires' is not a list of strings.")
            }
            Pep518Violation::BackendNotString => {
                write!(f, "'build-system.build-backend' is not a string.")
            }
            Pep518Violation::EmptyBackend => {
                write!(f, "'build-system.build-backend' is empty.")
            }
        }
    }
}

/// Why an editable install was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableReason {
    /// PEP 517 processing was requested by the caller
    ExplicitlyRequested,
    /// pyproject.toml exists and setup.py does not
    NoSetupPy,
    /// `build-backend` is declared and isolation was left unspecified
    BackendDeclared,
    /// pyproject.toml exists without a backend and isolation was left unspecified
    PyprojectPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableUnsupportedError {
    pub package: String,
    pub reason: EditableReason,
}

impl EditableUnsupportedError {
    pub fn new(package: impl Into<String>, reason: EditableReason) -> Self {
        Self {
            package: package.into(),
            reason,
        }
    }
}

impl fmt::Display for EditableUnsupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let package = &self.package;
        match self.reason {
            EditableReason::ExplicitlyRequested | EditableReason::NoSetupPy => {
                let because = if self.reason == EditableReason::ExplicitlyRequested {
                    "PEP 517 processing was explicitly requested"
                } else {
                    "it has a pyproject.toml file and no setup.py"
                };
                write!(
                    f,
                    "Error installing '{package}': editable mode is not supported for \
                     pyproject.toml-style projects. This project is being processed \
                     as pyproject.toml-style because {because}. \
                     See PEP 517 for the relevant specification."
                )
            }
            EditableReason::BackendDeclared => write!(
                f,
                "Error installing '{package}': editable mode is not supported for \
                 pyproject.toml-style projects. This project is pyproject.toml-style \
                 because it has a pyproject.toml file and a \"build-backend\" key for \
                 the [build-system] table, but editable mode is undefined for \
                 pyproject.toml-style projects. Since the project has a setup.py, you \
                 may pass --no-use-pep517 to opt out of pyproject.toml-style processing. \
                 However, this is an unsupported combination. See PEP 517 for details \
                 on pyproject.toml-style projects."
            ),
            EditableReason::PyprojectPresent => write!(
                f,
                "Error installing '{package}': editable mode is not supported for \
                 pyproject.toml-style projects. This project is being processed as \
                 pyproject.toml-style because it has a pyproject.toml file. Since the \
                 project has a setup.py and the pyproject.toml has no \"build-backend\" \
                 key for the [build-system] table, you may pass --no-use-pep517 to opt \
                 out of pyproject.toml-style processing. See PEP 517 for details on \
                 pyproject.toml-style projects."
            ),
        }
    }
}

impl std::error::Error for EditableUnsupportedError {}

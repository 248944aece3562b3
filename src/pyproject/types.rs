//! Inputs and outputs of build policy resolution

use serde::{Deserialize, Serialize};

/// Config file whose `[build-system]` table declares build requirements
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Legacy build script
pub const SETUP_PY_FILE: &str = "setup.py";

/// Backend that emulates direct `setup.py` execution
pub const DEFAULT_BACKEND: &str = "setuptools.build_meta:__legacy__";

/// Requirements assumed for the default backend
pub const DEFAULT_REQUIRES: [&str; 2] = ["setuptools>=40.8.0", "wheel"];

pub(crate) const BUILD_SYSTEM_KEY: &str = "build-system";
pub(crate) const REQUIRES_KEY: &str = "requires";
pub(crate) const BUILD_BACKEND_KEY: &str = "build-backend";

pub fn default_requires() -> Vec<String> {
    DEFAULT_REQUIRES.iter().map(|r| r.to_string()).collect()
}

/// Whether the caller asked for PEP 517 (isolated) processing.
///
/// `Disabled` and `Unspecified` drive different branches of the resolver and
/// are never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsolationRequest {
    #[default]
    Unspecified,
    Enabled,
    Disabled,
}

impl IsolationRequest {
    /// The explicit choice, if the caller made one
    pub fn explicit(self) -> Option<bool> {
        match self {
            IsolationRequest::Unspecified => None,
            IsolationRequest::Enabled => Some(true),
            IsolationRequest::Disabled => Some(false),
        }
    }
}

impl From<Option<bool>> for IsolationRequest {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => IsolationRequest::Unspecified,
            Some(true) => IsolationRequest::Enabled,
            Some(false) => IsolationRequest::Disabled,
        }
    }
}

/// Raw `[build-system]` table as read from pyproject.toml.
///
/// Keys are not trusted until they go through [`super::requires`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildSystemDeclaration {
    table: toml::Table,
}

impl BuildSystemDeclaration {
    pub fn new(table: toml::Table) -> Self {
        Self { table }
    }

    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.table.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<toml::Table> for BuildSystemDeclaration {
    fn from(table: toml::Table) -> Self {
        Self::new(table)
    }
}

/// Everything the resolver needs to decide how a package is built
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionInput {
    pub build_system: Option<BuildSystemDeclaration>,
    pub has_pyproject: bool,
    pub has_setup_py: bool,
    pub isolation: IsolationRequest,
    pub editable: bool,
    /// Used for diagnostics only
    pub package_name: String,
}

impl ResolutionInput {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            build_system: None,
            has_pyproject: false,
            has_setup_py: false,
            isolation: IsolationRequest::Unspecified,
            editable: false,
            package_name: package_name.into(),
        }
    }

    pub fn with_build_system(mut self, build_system: Option<BuildSystemDeclaration>) -> Self {
        self.build_system = build_system;
        self
    }

    pub fn with_files(mut self, has_pyproject: bool, has_setup_py: bool) -> Self {
        self.has_pyproject = has_pyproject;
        self.has_setup_py = has_setup_py;
        self
    }

    pub fn with_isolation(mut self, isolation: IsolationRequest) -> Self {
        self.isolation = isolation;
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

/// Backend to invoke plus requirements to verify once the build
/// environment is prepared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsolatedBuild {
    pub backend: String,
    pub post_install_checks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionOutput {
    /// Declared or defaulted build requirements; `None` only in legacy mode
    /// without a declaration
    pub requires: Option<Vec<String>>,
    /// `None` means the legacy `setup.py` path is used
    pub isolated_build: Option<IsolatedBuild>,
}

impl ResolutionOutput {
    pub fn legacy(requires: Option<Vec<String>>) -> Self {
        Self {
            requires,
            isolated_build: None,
        }
    }

    pub fn isolated(
        requires: Option<Vec<String>>,
        backend: impl Into<String>,
        post_install_checks: Vec<String>,
    ) -> Self {
        Self {
            requires,
            isolated_build: Some(IsolatedBuild {
                backend: backend.into(),
                post_install_checks,
            }),
        }
    }

    pub fn is_isolated(&self) -> bool {
        self.isolated_build.is_some()
    }

    pub fn backend(&self) -> Option<&str> {
        self.isolated_build.as_ref().map(|b| b.backend.as_str())
    }
}

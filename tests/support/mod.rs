#![allow(dead_code)]

use pyproject_policy::{
    load_pyproject, CollectingHandler, ConfigurationError, EditableReason, IsolationRequest,
    Pep518Violation, RealFileSystem, ResolutionOutput, ResolveError,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PACKAGE: &str = "demo";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("pyproject")
        .join(name)
}

/// Source directory built on the fly in a temp dir
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_pyproject(self, content: &str) -> Self {
        fs::write(self.dir.path().join("pyproject.toml"), content).unwrap();
        self
    }

    pub fn with_setup_py(self) -> Self {
        fs::write(
            self.dir.path().join("setup.py"),
            "from setuptools import setup\nsetup()\n",
        )
        .unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Run the loader against a real directory, capturing diagnostics
pub fn load_dir(
    dir: &Path,
    isolation: IsolationRequest,
    editable: bool,
) -> (Result<ResolutionOutput, ResolveError>, CollectingHandler) {
    let handler = CollectingHandler::new();
    let result = load_pyproject(
        &RealFileSystem::new(),
        &handler,
        isolation,
        editable,
        dir,
        PACKAGE,
    );
    (result, handler)
}

/// Expected outcome of a resolution, compared by category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Legacy,
    Isolated,
    Parse,
    Violation(Pep518Violation),
    MissingSetupPy,
    BackendDeclared,
    Editable(EditableReason),
}

pub fn outcome(result: &Result<ResolutionOutput, ResolveError>) -> Outcome {
    match result {
        Ok(output) if output.is_isolated() => Outcome::Isolated,
        Ok(_) => Outcome::Legacy,
        Err(ResolveError::Parse { .. }) => Outcome::Parse,
        Err(ResolveError::Configuration(err)) => match err {
            ConfigurationError::NonCompliant { reason, .. } => Outcome::Violation(*reason),
            ConfigurationError::MissingSetupPy { .. } => Outcome::MissingSetupPy,
            ConfigurationError::BackendDeclared { .. } => Outcome::BackendDeclared,
            ConfigurationError::EditableUnsupported(e) => Outcome::Editable(e.reason),
        },
        Err(other) => panic!("Unexpected error: {}", other),
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

//! pyproject.toml build policy: PEP 517 isolated builds vs legacy setup.py

pub mod loader;
pub mod reader;
pub mod requires;
pub mod resolver;
pub mod types;

pub use loader::{load_pyproject, load_pyproject_from_disk};
pub use reader::{pyproject_path, read_build_system};
pub use requires::{declared_backend, extract_requires};
pub use resolver::resolve;
pub use types::{
    default_requires, BuildSystemDeclaration, IsolatedBuild, IsolationRequest, ResolutionInput,
    ResolutionOutput, DEFAULT_BACKEND, DEFAULT_REQUIRES, PYPROJECT_FILE, SETUP_PY_FILE,
};

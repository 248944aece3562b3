//! pyproject-policy - decide how a Python source package is built
//!
//! Given a package's source directory, this library decides whether the
//! package is built through a PEP 517 backend inside an isolated build
//! environment or through its legacy `setup.py`, and which build requirements
//! have to be installed first.
//!
//! # Example Usage
//!
//! ```no_run
//! use pyproject_policy::{load_pyproject_from_disk, IsolationRequest};
//! use std::path::Path;
//!
//! let output = load_pyproject_from_disk(
//!     IsolationRequest::Unspecified,
//!     false,
//!     Path::new("/tmp/src/demo"),
//!     "demo",
//! )?;
//!
//! match &output.isolated_build {
//!     Some(build) => println!("PEP 517 via {}", build.backend),
//!     None => println!("legacy setup.py build"),
//! }
//! # Ok::<(), pyproject_policy::ResolveError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`pyproject`]: reading pyproject.toml, validating `[build-system]`, and
//!   the resolution decision table
//! - [`report`]: caller-supplied diagnostic sink for the non-fatal warning
//! - [`fs`]: file system abstraction used by the loader
//! - [`config`]: environment configuration and flag normalization

pub mod config;
pub mod error;
pub mod fs;
pub mod pyproject;
pub mod report;
pub mod util;

pub use config::{ConfigError, PolicyConfig};
pub use error::{
    ConfigurationError, EditableReason, EditableUnsupportedError, Pep518Violation, ResolveError,
};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use pyproject::{
    load_pyproject, load_pyproject_from_disk, resolve, BuildSystemDeclaration, IsolatedBuild,
    IsolationRequest, ResolutionInput, ResolutionOutput,
};
pub use report::{CollectingHandler, DiagnosticEvent, DiagnosticHandler, LoggingHandler, NoOpHandler};
pub use util::{init_default, init_from_config, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Diagnostics reported while resolving a package's build policy

mod handler;
mod logging;

pub use handler::{CollectingHandler, DiagnosticEvent, DiagnosticHandler, NoOpHandler};
pub use logging::LoggingHandler;

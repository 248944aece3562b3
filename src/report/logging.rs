//! Logging-based diagnostic handler

use super::{DiagnosticEvent, DiagnosticHandler};
use tracing::{debug, warn};

/// Handler that forwards diagnostics to tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl DiagnosticHandler for LoggingHandler {
    fn on_diagnostic(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::EditableLegacyFallback { package, message } => {
                warn!(package = %package, "{}", message);
            }
            DiagnosticEvent::Resolved {
                package,
                isolated,
                backend,
            } => {
                debug!(
                    package = %package,
                    isolated,
                    backend = backend.as_deref().unwrap_or("setup.py"),
                    "Resolved build policy"
                );
            }
        }
    }
}

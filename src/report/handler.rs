//! Diagnostic handler trait and events

use std::sync::Mutex;

/// Events emitted while a package's build policy is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Editable install of a project declaring a backend, with isolation
    /// explicitly disabled. Installation proceeds in legacy mode.
    EditableLegacyFallback { package: String, message: String },

    /// Resolution finished
    Resolved {
        package: String,
        isolated: bool,
        backend: Option<String>,
    },
}

impl DiagnosticEvent {
    pub fn is_warning(&self) -> bool {
        matches!(self, DiagnosticEvent::EditableLegacyFallback { .. })
    }
}

/// Sink for diagnostics, supplied by the caller
pub trait DiagnosticHandler: Send + Sync {
    fn on_diagnostic(&self, event: &DiagnosticEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl DiagnosticHandler for NoOpHandler {
    fn on_diagnostic(&self, _event: &DiagnosticEvent) {}
}

/// Handler that keeps every event in memory
#[derive(Debug, Default)]
pub struct CollectingHandler {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn warnings(&self) -> Vec<DiagnosticEvent> {
        self.events()
            .into_iter()
            .filter(DiagnosticEvent::is_warning)
            .collect()
    }
}

impl DiagnosticHandler for CollectingHandler {
    fn on_diagnostic(&self, event: &DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl DiagnosticHandler for CountingHandler {
        fn on_diagnostic(&self, _event: &DiagnosticEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn fallback() -> DiagnosticEvent {
        DiagnosticEvent::EditableLegacyFallback {
            package: "demo".to_string(),
            message: "editable".to_string(),
        }
    }

    fn resolved() -> DiagnosticEvent {
        DiagnosticEvent::Resolved {
            package: "demo".to_string(),
            isolated: false,
            backend: None,
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_diagnostic(&fallback());
    }

    #[test]
    fn test_handler_as_trait_object() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler: Box<dyn DiagnosticHandler> = Box::new(CountingHandler {
            count: count.clone(),
        });

        handler.on_diagnostic(&fallback());
        handler.on_diagnostic(&resolved());

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_collecting_handler_separates_warnings() {
        let handler = CollectingHandler::new();
        handler.on_diagnostic(&resolved());
        handler.on_diagnostic(&fallback());

        assert_eq!(handler.events().len(), 2);
        assert_eq!(handler.warnings(), vec![fallback()]);
    }
}

//! Utility modules

pub mod logging;

pub use logging::{init_default, init_from_config, init_logging, LoggingConfig};

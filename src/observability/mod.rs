//! Observability
//!
//! Structured logging setup shared by the binary and tests.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};

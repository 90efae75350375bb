//! Shared utilities for libris crates
//!
//! Holds the pieces every other crate needs without pulling in domain
//! knowledge: the logging bootstrap and error cause-chain rendering.

pub mod logging;

pub use logging::{format_error, init, LogLevel, LogOptions, LoggingError};

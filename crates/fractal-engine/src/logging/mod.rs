//! Logging setup.
//!
//! Everything logs through the `log` facade; `env_logger` is the backend and
//! is installed once from `main`.

mod init;

pub use init::{init_logging, LoggingConfig};

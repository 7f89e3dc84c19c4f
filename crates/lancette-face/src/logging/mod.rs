//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so
//! hosts embedding the face do not fight over the global logger.

mod init;

pub use init::{LoggingConfig, init_logging};

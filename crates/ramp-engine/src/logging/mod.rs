//! Logging utilities.
//!
//! Libraries in this workspace only talk to the `log` facade; the binary
//! installs the `env_logger` backend through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};

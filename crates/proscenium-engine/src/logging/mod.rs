//! Logging setup.
//!
//! The engine logs through the `log` facade; hosts that want output call
//! [`init_logging`] once, or install their own logger instead.

mod init;

pub use init::{init_logging, LoggingConfig};

//! Infrastructure
//!
//! Configuration loading and logging setup for the binary and for library
//! consumers that want the same defaults.

pub mod config;
pub mod logging;

//! Exchange code translation
//!
//! Maps internal exchange identifiers to the codes expected by broker API
//! endpoints, and TradingView exchange codes back to internal identifiers.

pub mod core;
pub mod infrastructure;

// Re-export commonly used types
pub use crate::core::{
    parse_exchange, resolve_alias, resolve_code, ApiContext, Exchange, ExchangeCodeRegistry,
    Region, RegistrySnapshot,
};
pub use infrastructure::config::{Config, LoggingConfig};

use thiserror::Error;

/// Main error type for the crate's non-lookup surfaces
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    #[error("Unknown API context: {0}")]
    UnknownContext(String),

    #[error("Configuration error: {0}")]
    Config(#[from] infrastructure::config::ConfigError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

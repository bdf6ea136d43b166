//! Core lookup types
//!
//! - Exchange: closed set of supported venues
//! - ApiContext: broker endpoint families with their own code fields
//! - ExchangeCodeRegistry: static code and alias tables

pub mod api_context;
pub mod exchange;
pub mod registry;

pub use api_context::ApiContext;
pub use exchange::{Exchange, Region};
pub use registry::{
    parse_exchange, resolve_alias, resolve_code, ExchangeCodeRegistry, RegistrySnapshot,
};

pub mod analysis;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod snapshot;
pub mod validation;

pub use error::{Result, TgError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Startup errors surfaced from `main`.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Environment configuration could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The `[package.metadata.leptos]` section is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the listener failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

//! Server startup errors.

use std::net::SocketAddr;

use leptos::config::errors::LeptosConfigError;
use thiserror::Error;

/// Result type alias using `ServerError`.
pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Logger could not be installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Leptos configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] LeptosConfigError),

    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

//! Host startup failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid {name}: {value:?}")]
    Config { name: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

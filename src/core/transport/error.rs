//! Failures that stop a transport.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The REST listener could not be opened.
    #[error("could not listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP initialisation handshake with the client failed.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// The MCP session task ended abnormally.
    #[error("MCP session ended abnormally: {0}")]
    Session(String),

    /// The REST server stopped with an I/O error.
    #[error("HTTP server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

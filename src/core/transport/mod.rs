//! Transport layer.
//!
//! - `stdio` feature (default): the tools over MCP on stdin/stdout
//! - `http` feature: a REST API for tutoring front-ends
//!
//! Both hand requests to the [`TutorOrchestrator`](crate::TutorOrchestrator)
//! owned by [`TutorServer`].

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
mod stdio;

use tracing::info;

use crate::core::TutorServer;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "http")]
pub use config::HttpConfig;

/// Run `server` on the selected transport until it shuts down.
pub async fn serve(server: TutorServer, transport: TransportConfig) -> TransportResult<()> {
    info!(
        server = server.name(),
        version = server.version(),
        %transport,
        "Starting transport"
    );

    match transport {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => stdio::serve(server).await,
        #[cfg(feature = "http")]
        TransportConfig::Http(config) => http::serve(server, &config).await,
    }
}

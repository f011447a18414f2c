//! MCP over stdin/stdout.
//!
//! stdout carries the protocol stream, so logging must stay on stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::TutorServer;

/// Serve until the client closes the stream.
pub(super) async fn serve(server: TutorServer) -> TransportResult<()> {
    info!("Serving MCP on stdin/stdout");

    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::Handshake(e.to_string()))?;

    session
        .waiting()
        .await
        .map_err(|e| TransportError::Session(e.to_string()))?;

    info!("MCP client disconnected");
    Ok(())
}

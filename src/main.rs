//! Tutor Orchestrator Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use tutor_orchestrator::core::config::LoggingConfig;
use tutor_orchestrator::core::{Config, TutorServer, transport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging);

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = TutorServer::new(config.clone());

    info!(
        topic_window = config.extraction.topic_history_window,
        subject_window = config.extraction.subject_history_window,
        "Orchestrator initialized"
    );

    transport::serve(server, config.transport).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the MCP stdio transport.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

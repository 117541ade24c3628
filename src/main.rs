//! Blog API Entry Point
//!
//! Initializes logging, loads configuration, and serves the API over HTTP.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use blog_api::core::config::{LoggingConfig, load_dotenv};
use blog_api::core::{BlogServer, Config, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_path = load_dotenv();

    // Initialize logging before anything else can emit events
    let logging = LoggingConfig::from_env();
    init_logging(&logging.level, logging.with_timestamps);

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    // Load configuration from environment
    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = HttpTransport::new(config.transport.clone());
    let server = BlogServer::new(config);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
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

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

//! Toolbridge binary entry point

use clap::Parser;
use std::path::PathBuf;
use toolbridge::config::Config;
use toolbridge::web::GatewayServer;
use toolbridge::Result;
use tracing::info;

/// Chat gateway over aggregated MCP tool capabilities
#[derive(Parser, Debug)]
#[command(name = "toolbridge", version = toolbridge::VERSION)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = toolbridge::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load .env before reading any credential variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = Config::load(&cli.config)?;
    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);

    let credential = config.credential();
    if credential.is_none() {
        info!(
            "No credential in ${}; auth-requiring providers will be skipped",
            config.credential_env
        );
    }

    info!(
        "toolbridge v{} starting with {} configured providers",
        toolbridge::VERSION,
        config.providers.len()
    );

    let server = GatewayServer::new(&config, credential)?;
    server.start(&host, port).await
}

fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(env_filter)
        .init();
}

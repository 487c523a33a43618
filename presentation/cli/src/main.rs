use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod setup;

use cli::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Shop CLI Entry Point
///
/// Initializes logging and configuration, wires the adapters into the use
/// cases and runs one command (or the interactive basket shell).
///
/// - config/: Environment configuration (API endpoint, session file)
/// - setup/: Dependency injection
/// - commands/: Command handlers and terminal rendering
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config).await;

    // 5. Run command
    commands::run(cli.command, &container).await
}

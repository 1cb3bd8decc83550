use anyhow::Context;
use clap::Parser;
use restriction_board_domain::{CliOverrides, Config};
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "restriction-board")]
#[command(version)]
#[command(about = "Restriction board - public list of player blocks and restrictions")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// JSON file with the initial records
    #[arg(long, value_name = "FILE")]
    seed_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        seed_file: cli.seed_file,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting restriction board v{}", env!("CARGO_PKG_VERSION"));
    match cli.config.clone().or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let repos = di::Repositories::new(&config)?;
    let use_cases = di::UseCases::new(&repos, &config);
    let app_state = use_cases.into_app_state(&config);

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.bind_address, config.server.web_port
            )
        })?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}

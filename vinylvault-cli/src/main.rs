//! vinylvault CLI - runs the catalog server
//!
//! - `serve` (default): connect to PostgreSQL and serve the JSON API
//! - `config`: print the resolved settings with the password masked

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use vinylvault_core::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use vinylvault_core::Settings;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "vinylvault",
    author,
    version,
    about = "REST API for a personal vinyl record catalog"
)]
struct Cli {
    /// Path to the YAML settings file
    #[arg(
        long,
        short = 'c',
        global = true,
        env = CONFIG_PATH_ENV,
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect to the database and serve the HTTP API (default)
    Serve,
    /// Print the resolved settings (file + environment) as YAML
    Config,
}

fn load_settings(path: &Path) -> Result<Settings> {
    Settings::load(path).with_context(|| format!("Failed to load settings from {}", path.display()))
}

async fn run_serve(settings: Settings) -> Result<()> {
    info!(
        addr = %settings.bind_addr(),
        database = %settings.redacted().database_url,
        "Starting vinylvault"
    );

    vinylvault_server::serve(&settings)
        .await
        .context("Server stopped with an error")
}

fn run_config(settings: &Settings) -> Result<()> {
    let yaml = settings
        .redacted()
        .to_yaml()
        .context("Failed to render settings")?;
    print!("{yaml}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let settings = load_settings(&cli.config)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_serve(settings).await?,
        Commands::Config => run_config(&settings)?,
    }

    Ok(())
}

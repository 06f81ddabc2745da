use anyhow::Result;
use clap::{Parser, Subcommand};
use launchtrack_core::env_parse_with_default;
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_PORT: u16 = 8787;

#[derive(Parser)]
#[command(name = "launchtrack")]
#[command(about = "Phase-gated launch tracker for SaaS projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (defaults to LAUNCHTRACK_PORT or 8787)
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create or update the database schema, then exit
    Migrate,
}

pub(crate) fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

fn default_port() -> u16 {
    env_parse_with_default("LAUNCHTRACK_PORT", DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            commands::serve::run(port.unwrap_or_else(default_port), host).await
        },
        Commands::Migrate => commands::migrate::run().await,
    }
}

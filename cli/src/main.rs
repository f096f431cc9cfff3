//! OpenDLP CLI
//!
//! Command-line interface for cloud DLP content inspection.
//!
//! # Usage
//!
//! ```bash
//! opendlp inspect --project my-project --text "Contact jane@example.com"
//! opendlp inspect --project my-project --file message.txt --exclude jane@example.com
//! opendlp inspect --project my-project --text "..." --format json
//! opendlp config set project my-project
//! ```

use clap::{Parser, Subcommand};
use opendlp_client::{HttpInspectService, Inspector, DEFAULT_ENDPOINT};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "opendlp")]
#[command(author = "OpenDLP")]
#[command(version = "0.1.0")]
#[command(about = "OpenDLP Command Line Interface", long_about = None)]
struct Cli {
    /// Inspection service endpoint URL
    #[arg(long, env = "OPENDLP_API_URL")]
    api_url: Option<String>,

    /// Bearer token for authentication
    #[arg(long, env = "OPENDLP_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "text")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect content for sensitive data
    Inspect(commands::inspect::InspectArgs),
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();
    let api_url = cli
        .api_url
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let access_token = cli.access_token.or_else(|| config.access_token.clone());

    let result = match cli.command {
        Commands::Inspect(args) => match HttpInspectService::new(&api_url, access_token.as_deref())
        {
            Ok(service) => match args.request_builder() {
                Ok(builder) => {
                    let inspector = Inspector::with_request(service, builder);
                    commands::inspect::handle(args, &inspector, &config, cli.format).await
                }
                Err(e) => Err(e),
            },
            Err(e) => Err(e.to_string()),
        },
        Commands::Config { action } => commands::config::handle(action).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

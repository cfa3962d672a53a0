use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cv_builder::app_log;
use cv_builder::core::{load_snapshot, CvDeriver};
use cv_builder::logging::init_logging;
use cv_builder::{start_web_server, AppConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvbuilder")]
#[command(about = "Derive renderable CV views from form data")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve {
        /// Overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Derive the view for a snapshot file (json, yaml or toml) and print it as JSON
    Derive {
        file: PathBuf,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            app_log!(
                info,
                "Environment: {}",
                std::env::var("CVBUILDER_ENV").unwrap_or_else(|_| "local".to_string())
            );
            start_web_server(&config.server).await
        }
        Command::Derive { file, compact } => {
            let snapshot = load_snapshot(&file).await?;
            let view = CvDeriver::new().derive(&snapshot);
            app_log!(debug, "Derived view for {}", file.display());

            let json = if compact {
                serde_json::to_string(&view)
            } else {
                serde_json::to_string_pretty(&view)
            }
            .context("Failed to serialize view")?;

            println!("{}", json);
            Ok(())
        }
    }
}

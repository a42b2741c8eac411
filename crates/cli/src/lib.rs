pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gramstay_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(
    name = "gramstay",
    about = "GramStay rural-stay recommendation CLI",
    long_about = "Browse the destination catalog, rank stays against trip constraints, and fetch search-box suggestions.",
    after_help = "Examples:\n  gramstay recommend --budget 6000 --group-size 2 --season October\n  gramstay recommend --query \"nature trip in kerala under 4000\" --json\n  gramstay suggest \"budget stays\"\n  gramstay destinations --sort rating"
)]
pub struct Cli {
    /// Path to a gramstay.toml config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to a catalog JSON document; overrides the configured source.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank catalog destinations against trip constraints")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(about = "Fetch canned search suggestions for a query fragment")]
    Suggest {
        query: String,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Browse and sort the destination catalog")]
    Destinations(commands::destinations::DestinationsArgs),
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides: ConfigOverrides {
            catalog_path: cli.catalog.clone(),
            ..ConfigOverrides::default()
        },
    }) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration issue: {error}");
            return ExitCode::from(2);
        }
    };

    init_logging(&config);
    let correlation_id = Uuid::new_v4().to_string();

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(&args, &config, &correlation_id),
        Command::Suggest { query, json } => commands::suggest::run(&query, json, &correlation_id),
        Command::Destinations(args) => {
            commands::destinations::run(&args, &config, &correlation_id)
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging(config: &AppConfig) {
    use gramstay_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
        Pretty => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .pretty()
                .init();
        }
        Json => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
    }
}

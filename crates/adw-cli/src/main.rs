mod commands;

use adw_app::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "adw")]
#[command(version, about = "Adwaita-web CLI - routes, upgrade pass and view rendering", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = adw_app::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table in match order
    Routes,

    /// Resolve a hash to a view and its parameters
    Route {
        /// Location hash, e.g. "#/posts/42"
        hash: String,
    },

    /// Upgrade adw-* placeholders in an HTML file
    Upgrade {
        /// Input HTML file
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the view for a hash against the configured backend
    Render {
        /// Location hash, e.g. "#/feed"
        hash: String,

        /// Override the backend origin from the config file
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Theme and accent color preferences
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print the stored settings
    Show,

    /// Change the theme and/or accent color
    Set {
        /// system, light or dark
        #[arg(short, long)]
        theme: Option<String>,

        /// blue, teal, green, yellow, orange, red, pink, purple or slate
        #[arg(short, long)]
        accent: Option<String>,

        /// Only save locally, do not push to the backend
        #[arg(long)]
        offline: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    init_logging(&config.logging.level)?;

    match cli.command {
        Commands::Routes => {
            commands::routes::list(&config)?;
        }
        Commands::Route { hash } => {
            commands::routes::resolve(&config, &hash)?;
        }
        Commands::Upgrade { file, output } => {
            commands::upgrade::execute(&file, output.as_deref())?;
        }
        Commands::Render { hash, base_url } => {
            commands::render::execute(config, &hash, base_url)?;
        }
        Commands::Settings { command } => {
            commands::settings::execute(&config, command)?;
        }
    }

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let level = tracing::Level::from_str(level)
        .with_context(|| format!("Invalid log level '{}'", level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

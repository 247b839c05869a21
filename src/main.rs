//! Poster Wizard - adaptive styling and wizard state tooling
//!
//! Prints the stylesheets the wizard applies for the current appearance,
//! lists the built-in paper formats, and manages the configuration file.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use posterwizard::cli::{CliResult, ConfigArgs, FormatsArgs, StyleArgs};
use posterwizard::constants::APP_NAME;

/// Poster Wizard - adaptive styling and wizard state tooling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived palette and widget stylesheets
    Style(StyleArgs),
    /// List the built-in paper formats
    Formats(FormatsArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let result: CliResult<()> = match &cli.command {
        Command::Style(args) => args.execute(),
        Command::Formats(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}

//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default configuration file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to resolve config path: {}", e))
                })?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {:#}", e)))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {}", e)))?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {:#}", e)))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Poster Wizard Configuration");
    println!("===========================");
    println!();

    println!("UI:");
    println!(
        "  Theme Mode: {}",
        format!("{:?}", config.ui.theme_mode).to_lowercase()
    );
    let styling = match config.ui.adaptive_styling {
        Some(true) => "on",
        Some(false) => "off",
        None => "platform default",
    };
    println!(
        "  Adaptive Styling: {} ({})",
        styling,
        if config.ui.adaptive_styling_enabled() {
            "active"
        } else {
            "inactive"
        }
    );
    println!("  Panel Radius: {}px", config.ui.panel_radius);
    println!("  Label Radius: {}px", config.ui.label_radius);
    println!();

    println!("Poster:");
    println!("  Paper Format: {}", config.poster.paper_format);
    println!("  Unit of Length: {}", config.poster.unit_of_length);
    println!(
        "  Open PDF After Saving: {}",
        config.poster.launch_pdf_application
    );
    println!();
}

//! Paper format listing.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::PaperFormats;
use clap::Args;
use serde::Serialize;

/// List the built-in paper formats
#[derive(Args, Debug)]
pub struct FormatsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct FormatOutput<'a> {
    name: &'a str,
    width: f64,
    height: f64,
}

#[derive(Serialize, Debug)]
struct FormatsOutput<'a> {
    unit: &'a str,
    formats: Vec<FormatOutput<'a>>,
}

impl FormatsArgs {
    /// Execute formats command
    pub fn execute(&self) -> CliResult<()> {
        let table = PaperFormats::load()
            .map_err(|e| CliError::io(format!("Failed to load paper formats: {:#}", e)))?;

        let formats = table
            .names_sorted()
            .into_iter()
            .filter_map(|name| {
                table.get(name).map(|size| FormatOutput {
                    name,
                    width: size.width,
                    height: size.height,
                })
            })
            .collect::<Vec<_>>();

        if self.json {
            return print_json(&FormatsOutput {
                unit: table.unit(),
                formats,
            });
        }

        for format in &formats {
            println!(
                "{:<12} {:>7.2} x {:<7.2} {}",
                format.name,
                format.width,
                format.height,
                table.unit()
            );
        }
        Ok(())
    }
}

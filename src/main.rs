// SPDX-License-Identifier: PMPL-1.0-or-later

//! culture-compass: Hofstede cultural dimensions dashboard
//!
//! Browse dimension descriptions, compare countries on a radar chart and read
//! scenario tips from the terminal, a terminal UI or a desktop window.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use culture_compass::config::CompassConfig;
use culture_compass::diagnostics;
use culture_compass::render::gui::DashboardGui;
use culture_compass::render::tui::DashboardTui;
use culture_compass::render::{self, OutputFormat};
use culture_compass::storage;
use culture_compass::types::Section;
use culture_compass::{Dashboard, ViewOutcome};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "culture-compass")]
#[command(version)]
#[command(about = "Hofstede cultural dimensions dashboard")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe all six cultural dimensions
    Overview {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Chart one dimension across every country
    Explore {
        /// Dimension name (default: first dimension)
        #[arg(short, long)]
        dimension: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare countries on a radar chart
    Compare {
        /// Countries to compare (default: configured preset)
        #[arg(short, long, value_delimiter = ',', value_parser = country_name)]
        countries: Option<Vec<String>>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Behavioural tips for a scenario
    Scenarios {
        /// Scenario name (default: first scenario)
        #[arg(short, long)]
        scenario: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Radar profile of a single country
    Profile {
        #[arg(short, long)]
        country: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List dimensions, countries and scenarios
    List,

    /// Write every view to timestamped files
    Export {
        /// Target directory (default: configured export_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Formats to write (default: configured export_formats)
        #[arg(short, long, value_enum, value_delimiter = ',')]
        formats: Option<Vec<OutputFormat>>,
    },

    /// Interactive terminal dashboard
    Tui,

    /// Desktop dashboard window
    Gui,

    /// Check reference tables and configuration
    Check,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Serialize instead of printing to the terminal
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output to file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// One item of a comma-separated country list, tolerant of spaces after
/// the commas.
fn country_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("country name must not be empty".to_string());
    }
    Ok(name.to_string())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CompassConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let dashboard = Dashboard::with_config(config).context("validating configuration")?;
    let defaults = dashboard.default_selection();

    match cli.command {
        Commands::Overview { output } => {
            let outcome = dashboard.overview();
            emit(&dashboard, &outcome, output)?;
        }

        Commands::Explore { dimension, output } => {
            let selection = defaults
                .clone()
                .with_section(Section::Explorer)
                .with_dimension(dimension.unwrap_or(defaults.dimension));
            let outcome = dashboard.dispatch(&selection)?;
            emit(&dashboard, &outcome, output)?;
        }

        Commands::Compare { countries, output } => {
            let selection = defaults
                .clone()
                .with_section(Section::Comparison)
                .with_countries(countries.unwrap_or(defaults.countries));
            let outcome = dashboard.dispatch(&selection)?;
            emit(&dashboard, &outcome, output)?;
        }

        Commands::Scenarios { scenario, output } => {
            let selection = defaults
                .clone()
                .with_section(Section::Scenarios)
                .with_scenario(scenario.unwrap_or(defaults.scenario));
            let outcome = dashboard.dispatch(&selection)?;
            emit(&dashboard, &outcome, output)?;
        }

        Commands::Profile { country, output } => {
            let selection = defaults
                .with_section(Section::Profile)
                .with_profile_country(country);
            let outcome = dashboard.dispatch(&selection)?;
            emit(&dashboard, &outcome, output)?;
        }

        Commands::List => {
            println!("Dimensions:");
            for name in dashboard.dimensions().list_dimensions() {
                let key = dashboard.dimensions().column_key(name)?;
                println!("  {} (column: {})", name, key);
            }
            println!("\nCountries:");
            for country in dashboard.data().list_countries() {
                println!("  {}", country);
            }
            println!("\nScenarios:");
            for scenario in dashboard.scenarios().list_scenarios() {
                println!("  {}", scenario);
            }
        }

        Commands::Export { dir, formats } => {
            let formats = formats.unwrap_or_else(|| dashboard.config().export_formats.clone());
            let stored = storage::export_views(&dashboard, dir.as_deref(), &formats)?;
            for path in &stored {
                println!("Saved: {}", path.display());
            }
        }

        Commands::Tui => DashboardTui::run(&dashboard)?,

        Commands::Gui => DashboardGui::run(dashboard)?,

        Commands::Check => diagnostics::run_self_diagnostics(&dashboard)?,
    }

    Ok(())
}

fn emit(dashboard: &Dashboard, outcome: &ViewOutcome, args: OutputArgs) -> Result<()> {
    let title = dashboard.config().title.as_str();
    debug!(section = %outcome.section(), "emitting view");
    match (args.format, args.output) {
        (None, None) => render::print_view(title, outcome),
        (Some(format), None) => println!("{}", format.serialize(title, outcome)?),
        (format, Some(path)) => {
            let format = format
                .or_else(|| {
                    path.extension()
                        .and_then(|ext| ext.to_str())
                        .and_then(OutputFormat::parse)
                })
                .unwrap_or(OutputFormat::Json);
            render::save_view(title, outcome, format, &path)?;
            println!("View saved to: {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_countries_are_trimmed() {
        let cli = Cli::try_parse_from([
            "culture-compass",
            "compare",
            "--countries",
            "USA, Japan ,Mexico",
        ])
        .unwrap();
        let Commands::Compare { countries, .. } = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(
            countries,
            Some(vec!["USA".to_string(), "Japan".to_string(), "Mexico".to_string()])
        );
    }

    #[test]
    fn compare_rejects_blank_country() {
        let parsed =
            Cli::try_parse_from(["culture-compass", "compare", "--countries", "USA,,Japan"]);
        assert!(parsed.is_err());
    }
}

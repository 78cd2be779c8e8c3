mod commands;
mod input;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use heartform::FormConfig;
use heartform_rules::SampleProfile;

#[derive(Parser)]
#[command(name = "heartform")]
#[command(version, about = "Heart-disease risk form - validation and sample data", long_about = None)]
struct Cli {
    /// Path to heartform.toml (defaults to ./heartform.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a record file (.toml or .json) or a built-in sample
    Validate {
        /// Record file mapping field names to values
        #[arg(required_unless_present = "sample", conflicts_with = "sample")]
        file: Option<PathBuf>,

        /// Validate a built-in sample instead of a file
        #[arg(short, long, value_parser = parse_profile)]
        sample: Option<SampleProfile>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a built-in sample record
    Sample {
        #[arg(value_parser = parse_profile)]
        profile: SampleProfile,

        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// List form fields with their rules and tooltips
    Fields {
        #[arg(long)]
        json: bool,
    },

    /// Run mount, sample fill and submit through an in-memory form
    Simulate {
        #[arg(value_parser = parse_profile)]
        profile: SampleProfile,
    },
}

fn parse_profile(name: &str) -> Result<SampleProfile, String> {
    name.parse().map_err(|err: heartform_rules::RuleError| err.to_string())
}

fn load_config(path: Option<&PathBuf>) -> Result<FormConfig> {
    match path {
        Some(path) => FormConfig::load(path),
        None => FormConfig::load_default(),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    // Execute command
    match cli.command {
        Commands::Validate { file, sample, json } => {
            commands::validate::execute(file.as_deref(), sample, json)?;
        }
        Commands::Sample { profile, json } => {
            commands::sample::execute(profile, json)?;
        }
        Commands::Fields { json } => {
            commands::fields::execute(json)?;
        }
        Commands::Simulate { profile } => {
            commands::simulate::execute(profile, config)?;
        }
    }

    Ok(())
}

//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod show;
pub mod tenants;
pub mod view;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::filter::DatePreset;

/// Chatlens - terminal analytics dashboard.
#[derive(Parser, Debug)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the dashboard metrics and render them
    Show(ShowArgs),

    /// List the tenants configured for this session
    Tenants(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `chatlens check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Preset date range
    #[arg(long, value_enum, conflicts_with_all = ["from", "to"])]
    pub range: Option<RangeArg>,

    /// Custom range start (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Custom range end (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Scope the session to a configured tenant id
    #[arg(long)]
    pub tenant: Option<String>,

    /// Print the normalized snapshot as JSON instead of rendering charts
    #[arg(long)]
    pub json: bool,
}

/// Date-range presets exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RangeArg {
    Today,
    LastMonth,
    LastYear,
}

impl From<RangeArg> for DatePreset {
    fn from(value: RangeArg) -> Self {
        match value {
            RangeArg::Today => DatePreset::Today,
            RangeArg::LastMonth => DatePreset::LastMonth,
            RangeArg::LastYear => DatePreset::LastYear,
        }
    }
}

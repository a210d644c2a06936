use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use uct_core::Version;

use crate::commands::{check_command, inspect_command, scan_command};

#[derive(Parser, Debug)]
#[command(name = "uct")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List Magento modules and the framework library found under a directory
    #[command(visible_alias = "s")]
    Scan {
        /// Project root to scan
        dir: PathBuf,

        /// Print components as JSON
        #[arg(long)]
        json: bool,

        /// Do not descend more than this many directory levels
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Report interfaces that inherit from deprecated interfaces
    #[command(visible_alias = "c")]
    Check {
        /// Project root to check
        dir: PathBuf,

        /// Version catalog file; may be repeated, later files win
        #[arg(long = "catalog", value_name = "FILE")]
        catalogs: Vec<PathBuf>,

        /// Only count deprecations introduced at or before this version
        #[arg(long, value_name = "VERSION")]
        target_version: Option<Version>,

        /// Do not descend more than this many directory levels
        #[arg(long)]
        max_depth: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show whether one interface inherits a deprecated interface
    #[command(visible_alias = "i")]
    Inspect {
        /// Project root holding the interface hierarchy
        dir: PathBuf,

        /// Fully qualified interface name, e.g. Vendor\Module\Api\FooInterface
        symbol: String,

        /// Version catalog file; may be repeated, later files win
        #[arg(long = "catalog", value_name = "FILE")]
        catalogs: Vec<PathBuf>,

        /// Only count deprecations introduced at or before this version
        #[arg(long, value_name = "VERSION")]
        target_version: Option<Version>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<ExitCode> {
        match self {
            Commands::Scan {
                dir,
                json,
                max_depth,
            } => scan_command(&dir, max_depth, json),
            Commands::Check {
                dir,
                catalogs,
                target_version,
                max_depth,
                json,
            } => check_command(&dir, catalogs, target_version, max_depth, json),
            Commands::Inspect {
                dir,
                symbol,
                catalogs,
                target_version,
                json,
            } => inspect_command(&dir, &symbol, catalogs, target_version, json),
        }
    }
}

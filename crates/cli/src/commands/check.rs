use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use uct_core::{Analyzer, Version};

use crate::display::print_report;
use crate::utils::resolve_config;

/// Exit status when the check completed and found problems
pub const FINDINGS_EXIT_CODE: u8 = 1;

pub fn check_command(
    dir: &Path,
    catalogs: Vec<PathBuf>,
    target_version: Option<Version>,
    max_depth: Option<usize>,
    json: bool,
) -> Result<ExitCode> {
    debug!("Checking directory: {}", dir.display());

    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }

    let config = resolve_config(dir, catalogs, target_version, max_depth)?;
    let analyzer = Analyzer::from_config(config).context("Failed to load version catalogs")?;
    info!("Loaded {} version facts", analyzer.store().len());

    let report = analyzer
        .analyze(dir)
        .with_context(|| format!("Failed to analyze {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(dir, &report);
    }

    if report.has_findings() {
        Ok(ExitCode::from(FINDINGS_EXIT_CODE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

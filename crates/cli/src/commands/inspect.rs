use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use uct_core::{Analyzer, Symbol, Version};

use crate::display::print_verdict;
use crate::utils::resolve_config;

pub fn inspect_command(
    dir: &Path,
    symbol: &str,
    catalogs: Vec<PathBuf>,
    target_version: Option<Version>,
    json: bool,
) -> Result<ExitCode> {
    debug!("Inspecting {} under {}", symbol, dir.display());

    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }

    let config = resolve_config(dir, catalogs, target_version, None)?;
    let analyzer = Analyzer::from_config(config).context("Failed to load version catalogs")?;

    let symbol = Symbol::new(symbol);
    let verdict = analyzer
        .check_symbol(dir, &symbol)
        .with_context(|| format!("Failed to index {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print_verdict(&symbol, &verdict, analyzer.store());
    }

    Ok(ExitCode::SUCCESS)
}

use anyhow::{Result, bail};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use uct_core::ComponentData;

use crate::display::print_components;
use crate::utils::resolve_config;

pub fn scan_command(dir: &Path, max_depth: Option<usize>, json: bool) -> Result<ExitCode> {
    debug!("Scanning directory: {}", dir.display());

    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }

    let config = resolve_config(dir, Vec::new(), None, max_depth)?;
    let components: Vec<ComponentData> = uct_core::ComponentScanner::new(dir)
        .with_max_depth(config.max_depth())
        .scan()
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        print_components(dir, &components);
    }

    Ok(ExitCode::SUCCESS)
}

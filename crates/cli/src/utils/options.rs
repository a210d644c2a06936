use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use uct_core::{Config, Version};

/// Config discovered from `dir` upward, with command-line values taking precedence
pub fn resolve_config(
    dir: &Path,
    catalogs: Vec<PathBuf>,
    target_version: Option<Version>,
    max_depth: Option<usize>,
) -> Result<Config> {
    let mut config = Config::discover(dir)
        .with_context(|| format!("Failed to load configuration for {}", dir.display()))?;

    if !catalogs.is_empty() {
        debug!("Catalogs from command line replace configured ones");
        config.catalogs = catalogs;
    }
    if target_version.is_some() {
        config.target_version = target_version;
    }
    if max_depth.is_some() {
        config.max_depth = max_depth;
    }

    Ok(config)
}

//! Analyzer that wires component discovery, hierarchy indexing and inspection together

use crate::{
    config::Config,
    error::{Error, Result},
    inspection::{DeprecationPropagationEngine, InheritedDeprecatedInterface, InspectionReporter},
    scanner::ComponentScanner,
    services::PhpHierarchyIndex,
    types::{ComponentData, Finding, PropagationVerdict, Symbol},
    versioning::VersionFactStore,
};
use serde::Serialize;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Result of analyzing one project tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    pub components: Vec<ComponentData>,
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

pub struct Analyzer {
    store: Arc<VersionFactStore>,
    config: Config,
}

impl Analyzer {
    pub fn new(store: Arc<VersionFactStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// Load the configured catalogs; fails when none are configured or one is unusable
    pub fn from_config(config: Config) -> Result<Self> {
        let mut store = VersionFactStore::load_all(config.catalogs.iter().map(|p| p.as_path()))?;
        if let Some(target) = config.target_version {
            store = store.with_target_version(target);
        }
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn store(&self) -> &Arc<VersionFactStore> {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scanner(&self, root: &Path) -> ComponentScanner {
        ComponentScanner::new(root).with_max_depth(self.config.max_depth())
    }

    pub fn analyze(&self, root: &Path) -> Result<AnalysisReport> {
        ensure_directory(root)?;

        let components: Vec<ComponentData> = self.scanner(root).scan().collect();
        debug!("Discovered {} components", components.len());
        if components.is_empty() {
            return Ok(AnalysisReport::default());
        }

        let index = PhpHierarchyIndex::index_paths(&[root])?;
        let reporter =
            InspectionReporter::new().with_suppressed(self.config.suppressed_issues.iter().copied());
        let inspection = InheritedDeprecatedInterface::new(
            DeprecationPropagationEngine::new(&index, &self.store),
            &reporter,
        );

        let mut findings = Vec::new();
        for declaration in index.table().declarations() {
            if !declaration.is_interface() {
                continue;
            }
            let Some(file) = declaration.file.as_ref() else {
                continue;
            };
            if !components.iter().any(|c| file.starts_with(&c.root)) {
                continue;
            }

            for (reference, record) in inspection.inspect(&declaration.symbol) {
                findings.push(Finding {
                    record,
                    reference: reference.declared_name,
                    file: file.clone(),
                    line: reference.line,
                });
            }
        }

        findings.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.line.cmp(&b.line))
                .then_with(|| a.record.target_symbol.cmp(&b.record.target_symbol))
                .then_with(|| a.reference.cmp(&b.reference))
        });

        debug!("Analysis produced {} findings", findings.len());
        Ok(AnalysisReport {
            components,
            findings,
        })
    }

    /// Propagation verdict for a single interface, with the hierarchy indexed from `root`
    pub fn check_symbol(&self, root: &Path, symbol: &Symbol) -> Result<PropagationVerdict> {
        ensure_directory(root)?;
        let index = PhpHierarchyIndex::index_paths(&[root])?;
        let engine = DeprecationPropagationEngine::new(&index, &self.store);
        Ok(engine.check_interface_inheritance(symbol))
    }
}

fn ensure_directory(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Not a directory: {}", root.display()),
        )))
    }
}

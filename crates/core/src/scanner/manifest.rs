//! Readers for the two files that mark a component directory.

use std::path::Path;
use tracing::trace;

/// Sub-area directory holding the module declaration
pub const MODULE_AREA_DIR: &str = "etc";
pub const MODULE_MANIFEST_FILE: &str = "module.xml";
pub const PACKAGE_MANIFEST_FILE: &str = "composer.json";
/// Package name of the framework library, the only library recognized on its own
pub const FRAMEWORK_LIBRARY_NAME: &str = "magento/framework";

/// `name` and `type` read from a package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMeta {
    pub name: Option<String>,
    pub package_type: Option<String>,
}

/// Read the module name declared by `<dir>/etc/module.xml`.
///
/// The name is the `name` attribute of the first child element of the root element.
pub fn read_module_name(dir: &Path) -> Option<String> {
    let path = dir.join(MODULE_AREA_DIR).join(MODULE_MANIFEST_FILE);
    if !path.is_file() {
        return None;
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            trace!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    parse_module_name(&contents)
}

pub fn parse_module_name(contents: &str) -> Option<String> {
    let document = match roxmltree::Document::parse(contents) {
        Ok(document) => document,
        Err(e) => {
            trace!("Malformed module declaration: {}", e);
            return None;
        }
    };

    document
        .root_element()
        .children()
        .find(|node| node.is_element())?
        .attribute("name")
        .map(|name| name.to_string())
}

/// Read `name` and `type` from `<dir>/composer.json`.
///
/// Returns `None` when the manifest is absent or cannot be read or parsed.
pub fn read_package_meta(dir: &Path) -> Option<PackageMeta> {
    let path = dir.join(PACKAGE_MANIFEST_FILE);
    if !path.is_file() {
        return None;
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            trace!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    parse_package_meta(&contents)
}

pub fn parse_package_meta(contents: &str) -> Option<PackageMeta> {
    let value: serde_json::Value = match serde_json::from_str(contents) {
        Ok(value) => value,
        Err(e) => {
            trace!("Malformed package manifest: {}", e);
            return None;
        }
    };

    let string_property = |key: &str| {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    };

    Some(PackageMeta {
        name: string_property("name"),
        package_type: string_property("type"),
    })
}

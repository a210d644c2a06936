use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Kind of component a directory was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentType {
    #[serde(rename = "magento2-module")]
    Module,
    #[serde(rename = "magento2-library")]
    Library,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Module => "magento2-module",
            ComponentType::Library => "magento2-library",
        }
    }

    /// Map a package manifest `type` value onto a component type
    pub fn from_manifest_type(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "magento2-module" => Some(ComponentType::Module),
            "magento2-library" => Some(ComponentType::Library),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module or library discovered by the component scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentData {
    /// Module name (`Vendor_Module`) or, for libraries, the package name
    pub name: String,
    /// `name` declared in the component's package manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    pub component_type: ComponentType,
    pub root: PathBuf,
}

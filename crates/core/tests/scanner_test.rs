//! Integration tests for component discovery on realistic project layouts

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use uct_core::{ComponentScanner, ComponentType};

fn write_module(dir: &Path, name: &str) {
    fs::create_dir_all(dir.join("etc")).unwrap();
    fs::write(
        dir.join("etc/module.xml"),
        format!(
            r#"<?xml version="1.0"?>
<config xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <module name="{name}"/>
</config>
"#
        ),
    )
    .unwrap();
}

fn write_composer(dir: &Path, manifest: serde_json::Value) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("composer.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_magento_project_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_module(&root.join("app/code/Vendor/Catalog"), "Vendor_Catalog");
    write_module(&root.join("app/code/Vendor/Sales"), "Vendor_Sales");
    write_composer(
        &root.join("app/code/Vendor/Sales"),
        serde_json::json!({ "name": "vendor/module-sales", "type": "magento2-module" }),
    );
    write_composer(
        &root.join("vendor/magento/framework"),
        serde_json::json!({ "name": "magento/framework", "type": "magento2-library" }),
    );
    write_composer(
        &root.join("vendor/monolog/monolog"),
        serde_json::json!({ "name": "monolog/monolog", "type": "library" }),
    );

    let scanner = ComponentScanner::new(root);
    let components: Vec<_> = scanner.scan().collect();
    let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Vendor_Catalog", "Vendor_Sales", "magento/framework"]
    );

    assert_eq!(components[1].package_name.as_deref(), Some("vendor/module-sales"));
    assert_eq!(components[2].component_type, ComponentType::Library);
    assert_eq!(components[2].root, root.join("vendor/magento/framework"));

    // Iterating the scanner again restarts from the root
    assert_eq!((&scanner).into_iter().count(), 3);
}

#[test]
fn test_mismatched_package_type_hides_subtree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let theme = root.join("app/design/frontend/Vendor/theme");
    write_module(&theme, "Vendor_Theme");
    write_composer(
        &theme,
        serde_json::json!({ "name": "vendor/theme", "type": "magento2-theme" }),
    );
    write_module(&theme.join("nested/Inner"), "Vendor_Inner");

    assert_eq!(ComponentScanner::new(root).scan().count(), 0);
}

#[test]
fn test_framework_library_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_composer(
        &root.join("lib/internal/Magento/Framework"),
        serde_json::json!({ "name": "magento/framework", "type": "magento2-library" }),
    );

    let components: Vec<_> = uct_core::scanner::scan(root).collect();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "magento/framework");
    assert_eq!(components[0].component_type, ComponentType::Library);
}

#[test]
fn test_depth_limit() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_module(&root.join("a/b/c/Deep"), "Vendor_Deep");

    assert_eq!(ComponentScanner::new(root).with_max_depth(3).scan().count(), 0);
    assert_eq!(ComponentScanner::new(root).with_max_depth(4).scan().count(), 1);
}

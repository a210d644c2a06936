use super::manifest::{self, FRAMEWORK_LIBRARY_NAME};
use crate::types::{ComponentData, ComponentType};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Discovers Magento modules and the framework library below a root directory.
///
/// Every call to [`ComponentScanner::scan`] starts a fresh depth-first traversal.
/// Components are produced lazily, so dropping the iterator abandons the walk.
#[derive(Debug, Clone)]
pub struct ComponentScanner {
    root: PathBuf,
    max_depth: usize,
}

impl ComponentScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Do not descend below `max_depth` directory levels under the root
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scan(&self) -> Components {
        debug!("Scanning for components under {}", self.root.display());
        Components {
            stack: vec![(self.root.clone(), 0)],
            visited: HashSet::new(),
            max_depth: self.max_depth,
        }
    }
}

impl IntoIterator for &ComponentScanner {
    type Item = ComponentData;
    type IntoIter = Components;

    fn into_iter(self) -> Self::IntoIter {
        self.scan()
    }
}

/// Scan `root` with default settings
pub fn scan(root: &Path) -> Components {
    ComponentScanner::new(root).scan()
}

/// What a single directory turned out to be
#[derive(Debug)]
enum DirectoryKind {
    Component(ComponentData),
    /// Module declaration contradicted by its package manifest; skip the whole subtree
    Conflict,
    Plain,
}

/// Lazy iterator over discovered components, in depth-first pre-order
#[derive(Debug)]
pub struct Components {
    stack: Vec<(PathBuf, usize)>,
    visited: HashSet<PathBuf>,
    max_depth: usize,
}

impl Iterator for Components {
    type Item = ComponentData;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((dir, depth)) = self.stack.pop() {
            if !dir.is_dir() {
                trace!("Skipping non-directory {}", dir.display());
                continue;
            }

            // Symlinked directories can point back up the tree
            let canonical = dir.canonicalize().unwrap_or_else(|_| dir.clone());
            if !self.visited.insert(canonical) {
                trace!("Already visited {}", dir.display());
                continue;
            }

            match classify(&dir) {
                DirectoryKind::Component(component) => {
                    debug!(
                        "Found {} '{}' at {}",
                        component.component_type,
                        component.name,
                        dir.display()
                    );
                    return Some(component);
                }
                DirectoryKind::Conflict => {
                    debug!(
                        "Package type does not match module declaration, skipping {}",
                        dir.display()
                    );
                }
                DirectoryKind::Plain => {
                    if depth >= self.max_depth {
                        debug!("Maximum scan depth reached at {}", dir.display());
                        continue;
                    }
                    // Reversed so the lexically first child is popped first
                    for child in subdirectories(&dir).into_iter().rev() {
                        self.stack.push((child, depth + 1));
                    }
                }
            }
        }

        None
    }
}

fn classify(dir: &Path) -> DirectoryKind {
    let module_name = manifest::read_module_name(dir);
    let mut name = module_name.clone();
    let mut component_type = Some(ComponentType::Module);
    let mut package_name = None;

    if let Some(meta) = manifest::read_package_meta(dir) {
        let declared_type = meta
            .package_type
            .as_deref()
            .and_then(ComponentType::from_manifest_type);

        if module_name.is_none() && meta.name.as_deref() == Some(FRAMEWORK_LIBRARY_NAME) {
            name = meta.name.clone();
            component_type = declared_type;
        } else if module_name.is_some() && declared_type != Some(ComponentType::Module) {
            return DirectoryKind::Conflict;
        }
        package_name = meta.name;
    }

    match (name, component_type) {
        (Some(name), Some(component_type)) => DirectoryKind::Component(ComponentData {
            name,
            package_name,
            component_type,
            root: dir.to_path_buf(),
        }),
        _ => DirectoryKind::Plain,
    }
}

fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            trace!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    children.sort();
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_module(dir: &Path, name: &str) {
        fs::create_dir_all(dir.join("etc")).unwrap();
        fs::write(
            dir.join("etc/module.xml"),
            format!(r#"<config><module name="{name}"/></config>"#),
        )
        .unwrap();
    }

    fn write_composer(dir: &Path, name: &str, package_type: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("composer.json"),
            format!(r#"{{ "name": "{name}", "type": "{package_type}" }}"#),
        )
        .unwrap();
    }

    #[test]
    fn test_module_without_package_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let module_dir = temp_dir.path().join("app/code/Vendor/Module");
        write_module(&module_dir, "Vendor_Module");

        let components: Vec<_> = scan(temp_dir.path()).collect();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "Vendor_Module");
        assert_eq!(components[0].package_name, None);
        assert_eq!(components[0].component_type, ComponentType::Module);
        assert_eq!(components[0].root, module_dir);
    }

    #[test]
    fn test_module_with_matching_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let module_dir = temp_dir.path().join("Vendor/Module");
        write_module(&module_dir, "Vendor_Module");
        write_composer(&module_dir, "vendor/module", "magento2-module");

        let components: Vec<_> = scan(temp_dir.path()).collect();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].package_name.as_deref(), Some("vendor/module"));
    }

    #[test]
    fn test_component_directory_is_a_leaf() {
        let temp_dir = TempDir::new().unwrap();
        let outer = temp_dir.path().join("Outer");
        write_module(&outer, "Vendor_Outer");
        write_module(&outer.join("nested/Inner"), "Vendor_Inner");

        let names: Vec<_> = scan(temp_dir.path()).map(|c| c.name).collect();
        assert_eq!(names, vec!["Vendor_Outer"]);
    }

    #[test]
    fn test_lexical_order() {
        let temp_dir = TempDir::new().unwrap();
        write_module(&temp_dir.path().join("b/Second"), "Vendor_Second");
        write_module(&temp_dir.path().join("a/First"), "Vendor_First");
        write_module(&temp_dir.path().join("c"), "Vendor_Third");

        let names: Vec<_> = scan(temp_dir.path()).map(|c| c.name).collect();
        assert_eq!(names, vec!["Vendor_First", "Vendor_Second", "Vendor_Third"]);
    }

    #[test]
    fn test_scan_restarts() {
        let temp_dir = TempDir::new().unwrap();
        write_module(&temp_dir.path().join("One"), "Vendor_One");
        write_module(&temp_dir.path().join("Two"), "Vendor_Two");

        let scanner = ComponentScanner::new(temp_dir.path());
        let first: Vec<_> = scanner.scan().take(1).collect();
        assert_eq!(first.len(), 1);

        let all: Vec<_> = (&scanner).into_iter().collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first[0]);
    }

    #[test]
    fn test_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        write_module(&temp_dir.path().join("a/b/c/Deep"), "Vendor_Deep");

        let shallow = ComponentScanner::new(temp_dir.path()).with_max_depth(2);
        assert_eq!(shallow.scan().count(), 0);

        let deep = ComponentScanner::new(temp_dir.path()).with_max_depth(4);
        assert_eq!(deep.scan().count(), 1);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(scan(&temp_dir.path().join("absent")).count(), 0);
    }

    #[test]
    fn test_unreadable_manifest_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let module_dir = temp_dir.path().join("Vendor/Module");
        write_module(&module_dir, "Vendor_Module");
        fs::write(module_dir.join("composer.json"), "{ broken").unwrap();

        let components: Vec<_> = scan(temp_dir.path()).collect();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].package_name, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_visited_once() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_module(&root.join("a/Module"), "Vendor_Module");
        write_module(&root.join("b/Other"), "Vendor_Other");
        std::os::unix::fs::symlink("..", root.join("a/loop")).unwrap();

        let names: Vec<_> = scan(root).map(|c| c.name).collect();
        assert_eq!(names, vec!["Vendor_Module", "Vendor_Other"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_component_reported_once() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_module(&root.join("real/Module"), "Vendor_Module");
        std::os::unix::fs::symlink(root.join("real/Module"), root.join("zlink")).unwrap();

        let components: Vec<_> = scan(root).collect();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].root, root.join("real/Module"));
    }
}

use std::path::Path;
use uct_core::{
    AnalysisReport, ComponentData, ComponentType, PropagationVerdict, Symbol, VersionFactStore,
};

/// Path relative to the scanned root when possible
pub fn relative_path<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

pub fn component_icon(component_type: ComponentType) -> &'static str {
    match component_type {
        ComponentType::Module => "🧩",
        ComponentType::Library => "📚",
    }
}

pub fn print_components(root: &Path, components: &[ComponentData]) {
    println!("🔍 Scanning: {}", root.display());
    println!("{}", "=".repeat(80));

    if components.is_empty() {
        println!("ℹ️  No components found");
        return;
    }

    for component in components {
        println!(
            "{} {} ({})",
            component_icon(component.component_type),
            component.name,
            component.component_type
        );
        println!("   📂 {}", relative_path(root, &component.root).display());
        if let Some(package) = &component.package_name {
            if package != &component.name {
                println!("   📦 {}", package);
            }
        }
    }

    println!("\n📊 {} components", components.len());
}

pub fn print_report(root: &Path, report: &AnalysisReport) {
    println!("🔍 Checking: {}", root.display());
    println!("{}", "=".repeat(80));
    println!("📊 {} components analyzed", report.components.len());

    if !report.has_findings() {
        println!("✅ No deprecated interface inheritance found");
        return;
    }

    let mut current_file: Option<&Path> = None;
    for finding in &report.findings {
        if current_file != Some(finding.file.as_path()) {
            println!("\n📄 {}", relative_path(root, &finding.file).display());
            current_file = Some(finding.file.as_path());
        }
        println!(
            "   ⚠️  line {}: [{}] {} [{}]",
            finding.line, finding.record.issue_code, finding.record.message, finding.record.severity
        );
        println!(
            "      {} extends {}",
            finding.record.target_symbol, finding.reference
        );
    }

    println!("\n❌ {} findings", report.findings.len());
}

pub fn print_verdict(symbol: &Symbol, verdict: &PropagationVerdict, store: &VersionFactStore) {
    println!("🔍 Inspecting: {}", symbol);
    println!("{}", "=".repeat(80));

    match &verdict.witness {
        Some(witness) if verdict.is_deprecated => {
            println!("⚠️  Inherits deprecated interface {}", witness);
            if let Some(fact) = store.fact_for(witness) {
                println!("   📅 Deprecated since {}", fact.deprecated_since);
                if let Some(removed) = fact.removed_since {
                    println!("   🗑️  Removed in {}", removed);
                }
            }
        }
        _ => println!("✅ No deprecated ancestor interface"),
    }
}

use super::symbol::Symbol;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A reported compatibility problem, detached from any source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub target_symbol: Symbol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Symbol>,
    pub issue_code: u32,
    pub severity: Severity,
    pub message: String,
}

/// A diagnostic attached to the parent reference that triggered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(flatten)]
    pub record: DiagnosticRecord,
    /// Parent name as written in the `extends` list
    pub reference: String,
    pub file: PathBuf,
    /// 1-based line of the reference
    pub line: u32,
}

use super::symbol::Symbol;
use serde::Serialize;

/// Outcome of a transitive deprecation check.
///
/// `witness` is set exactly when `is_deprecated` is true and names an ancestor that is
/// itself directly deprecated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropagationVerdict {
    pub is_deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Symbol>,
}

impl PropagationVerdict {
    pub fn not_deprecated() -> Self {
        Self {
            is_deprecated: false,
            witness: None,
        }
    }

    pub fn deprecated_by(witness: Symbol) -> Self {
        Self {
            is_deprecated: true,
            witness: Some(witness),
        }
    }
}

impl Default for PropagationVerdict {
    fn default() -> Self {
        Self::not_deprecated()
    }
}

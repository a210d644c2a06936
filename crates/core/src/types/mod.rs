pub mod component;
pub mod declaration;
pub mod diagnostic;
pub mod symbol;
pub mod verdict;
pub mod version;

// Re-export commonly used types
pub use component::{ComponentData, ComponentType};
pub use declaration::{ClassDeclaration, DeclarationKind, DeclaredParent};
pub use diagnostic::{DiagnosticRecord, Finding, Severity};
pub use symbol::Symbol;
pub use verdict::PropagationVerdict;
pub use version::Version;

//! Deprecated-interface inheritance inspection

pub mod inherited_deprecated_interface;
pub mod issue;
pub mod propagation;
pub mod reporter;

pub use inherited_deprecated_interface::InheritedDeprecatedInterface;
pub use issue::SupportedIssue;
pub use propagation::DeprecationPropagationEngine;
pub use reporter::InspectionReporter;

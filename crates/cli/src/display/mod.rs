pub mod formatter;

pub use formatter::{print_components, print_report, print_verdict};

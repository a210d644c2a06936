pub mod check;
pub mod inspect;
pub mod scan;

pub use check::check_command;
pub use inspect::inspect_command;
pub use scan::scan_command;

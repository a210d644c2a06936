pub mod options;

pub use options::resolve_config;

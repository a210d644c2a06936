//! Configuration management for the compatibility scanner

mod settings;

// Re-export main types
pub use settings::{Config, CONFIG_FILE_NAMES};

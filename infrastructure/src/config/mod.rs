//! Configuration loading and raw file structures

pub mod file_config;
pub mod loader;

pub use file_config::{FileAnthropicConfig, FileConfig, FileModelsConfig, FileSessionConfig};
pub use loader::ConfigLoader;

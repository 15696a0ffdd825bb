//! Infrastructure layer for chameleon
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, configuration file loading, and results
//! persistence.

pub mod config;
pub mod providers;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use providers::{AnthropicConfig, AnthropicGateway};
pub use report::JsonResultsWriter;

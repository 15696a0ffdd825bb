//! Presentation layer for chameleon
//!
//! This crate contains the CLI definition, progress reporter, and
//! console output formatters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleProgress;

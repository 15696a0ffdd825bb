//! Results persistence

pub mod json_writer;

pub use json_writer::{JsonResultsWriter, WriteError};

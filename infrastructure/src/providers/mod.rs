//! Provider adapters implementing the completion gateway port

pub mod anthropic;

pub use anthropic::{AnthropicConfig, AnthropicGateway};

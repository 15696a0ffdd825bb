//! Anthropic provider adapter

pub mod adapter;
pub mod types;

pub use adapter::{AnthropicConfig, AnthropicGateway};

//! Prompt corpus and request templates

pub mod corpus;
pub mod template;

pub use corpus::builtin_prompts;
pub use template::PromptTemplate;

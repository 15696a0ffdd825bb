//! Stories and continuations

pub mod entities;

pub use entities::{Continuation, OriginalStory, StoryPrompt};

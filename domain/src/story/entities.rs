//! Story entities - prompts, originals, and imitation continuations.
//!
//! An [`OriginalStory`] is split at its midpoint character so that other
//! models can be asked to continue the first half. The split is the load
//! bearing invariant of the whole tournament: re-joining the halves must
//! reproduce the story byte for byte.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// A writing prompt with an advisory target length (words)
///
/// The target length is a hint carried through to the results log;
/// nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPrompt {
    pub text: String,
    pub target_length: usize,
}

impl StoryPrompt {
    pub fn new(text: impl Into<String>, target_length: usize) -> Self {
        Self {
            text: text.into(),
            target_length,
        }
    }
}

/// An original story written by one model for one prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginalStory {
    /// The model that authored the story
    pub model: Model,
    /// The full story text
    pub story: String,
    /// Everything up to the midpoint character
    pub first_half: String,
    /// Everything from the midpoint character on
    pub second_half: String,
}

impl OriginalStory {
    /// Split a generated story at its midpoint character.
    ///
    /// The midpoint is `char_count / 2` characters, not bytes, so the
    /// split never lands inside a UTF-8 sequence. Invariant:
    /// `first_half + second_half == story` exactly.
    pub fn from_text(model: Model, story: impl Into<String>) -> Self {
        let story = story.into();
        let half_chars = story.chars().count() / 2;
        let split_at = story
            .char_indices()
            .nth(half_chars)
            .map(|(i, _)| i)
            .unwrap_or(story.len());
        let (first, second) = story.split_at(split_at);
        Self {
            model,
            first_half: first.to_string(),
            second_half: second.to_string(),
            story,
        }
    }
}

/// One model's attempt to continue another model's story convincingly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Continuation {
    /// The model whose story is being continued
    pub original_model: Model,
    /// The model writing the imitation
    pub continuing_model: Model,
    /// The generated continuation text
    pub continuation: String,
}

impl Continuation {
    pub fn new(
        original_model: Model,
        continuing_model: Model,
        continuation: impl Into<String>,
    ) -> Self {
        Self {
            original_model,
            continuing_model,
            continuation: continuation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(text: &str) -> OriginalStory {
        OriginalStory::from_text(Model::Claude3Haiku, text)
    }

    #[test]
    fn test_split_roundtrip_even() {
        let s = story("abcdef");
        assert_eq!(s.first_half, "abc");
        assert_eq!(s.second_half, "def");
        assert_eq!(format!("{}{}", s.first_half, s.second_half), s.story);
    }

    #[test]
    fn test_split_roundtrip_odd() {
        let s = story("abcde");
        assert_eq!(s.first_half, "ab");
        assert_eq!(s.second_half, "cde");
        assert_eq!(format!("{}{}", s.first_half, s.second_half), s.story);
    }

    #[test]
    fn test_split_empty() {
        let s = story("");
        assert_eq!(s.first_half, "");
        assert_eq!(s.second_half, "");
        assert_eq!(s.story, "");
    }

    #[test]
    fn test_split_single_char() {
        let s = story("x");
        assert_eq!(s.first_half, "");
        assert_eq!(s.second_half, "x");
    }

    #[test]
    fn test_split_multibyte_is_char_based() {
        // 5 chars, each multibyte; must split after 2 chars, not mid-codepoint
        let s = story("héllö");
        assert_eq!(s.first_half.chars().count(), 2);
        assert_eq!(format!("{}{}", s.first_half, s.second_half), s.story);
    }
}

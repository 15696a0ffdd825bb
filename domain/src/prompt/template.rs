//! Prompt templates for each tournament phase

/// Templates for generating the three request kinds
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking a model to continue another model's story.
    ///
    /// Embeds the original writing prompt and the first half verbatim,
    /// tells the model to pick up from the exact cut point (even
    /// mid-word), and requires the `<completion>` wrapper so the
    /// continuation can be extracted cleanly.
    pub fn continuation(prompt: &str, first_half: &str) -> String {
        format!(
            "Continue this story, keeping in mind the original prompt: '{}'\n\n\
             Here's the first half of the story:\n\n{}\n\n\
             Now continue the story from where it left off. If the first half \
             ended mid-word, pick up from the middle of the word. \
             Put your completion in <completion></completion> tags.",
            prompt, first_half
        )
    }

    /// Prompt asking a judge to rank a blinded continuation pool.
    ///
    /// Entries are numbered 1..=n in presentation order; the judge must
    /// answer with a full ranking in a `<ranking>` block.
    pub fn identification<'a>(
        prompt: &str,
        first_half: &str,
        continuations: impl Iterator<Item = &'a str>,
    ) -> String {
        let mut text = format!(
            "Here's the first half of a story, which was written in response to \
             this prompt: '{}'\n\n\
             First half of the story:\n\n{}\n\n\
             Below are several possible continuations for this story. One of them \
             is the original continuation. The others are imitations written by a \
             different model. Please rank these continuations from most likely to \
             be the original (1) to least likely (n).\n\n\
             Provide your answer in the following XML format:\n\
             <ranking>\n\
             1. [number of your top guess]\n\
             2. [number of your second guess]\n\
             ...\n\
             n. [number of your last guess]\n\
             </ranking>\n\n\
             Here are the continuations:\n\n",
            prompt, first_half
        );
        for (i, continuation) in continuations.enumerate() {
            text.push_str(&format!("{}. {}\n\n", i + 1, continuation));
        }
        text
    }
}

use crate::error::Result;
use crate::sm2::{CardState, Quality};

/// Where cards live between reviews. The scheduler itself never stores anything.
pub trait SpacedRepetition {
    /// no-op when the word is already known
    fn add_fresh_word(&mut self, word: &str) -> Result<()>;

    /// find next reviewable word
    fn next_to_review(&mut self) -> Result<Option<String>>;

    fn update(&mut self, question: &str, quality: Quality) -> Result<CardState>;

    fn delete(&mut self, question: &str) -> Result<()>;
}

//! Token sets built from one line of input

use std::collections::HashSet;

/// The set of tokens present in one input line.
///
/// Tokens are produced by splitting on the ASCII space character only. No
/// trimming or case folding happens, and empty tokens from leading, trailing
/// or repeated spaces are kept as members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: HashSet<String>,
}

impl Sentence {
    /// Build a sentence from a raw line.
    pub fn new(text: &str) -> Self {
        Self {
            tokens: text.split(' ').map(str::to_owned).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: splitting any string yields at least one token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the distinct tokens in unspecified order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl From<&str> for Sentence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

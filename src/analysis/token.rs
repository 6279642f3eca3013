//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows between the tokenizer and the token
//! filters. It remembers its position in the token sequence and its byte
//! offsets in the normalized text, and can be marked as stopped instead of
//! being removed.
//!
//! # Examples
//!
//! ```
//! use sentia::analysis::token::Token;
//!
//! let token = Token::with_offsets("dia", 1, 4, 7);
//! assert_eq!(token.text, "dia");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.start_offset, 4);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the analyzed text
    pub start_offset: usize,

    /// The byte offset where this token ends in the analyzed text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Collect the text of every token that was not marked as stopped.
pub fn into_words(tokens: TokenStream) -> Vec<String> {
    tokens
        .filter(|token| !token.is_stopped())
        .map(|token| token.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(!token.stopped);
    }

    #[test]
    fn test_token_methods() {
        let token = Token::with_offsets("correndo", 2, 10, 18)
            .with_text("corr")
            .stop();

        assert_eq!(token.text, "corr");
        assert_eq!(token.position, 2);
        assert_eq!(token.start_offset, 10);
        assert!(token.is_stopped());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_into_words_skips_stopped() {
        let tokens = vec![Token::new("bom", 0).stop(), Token::new("dia", 1)];
        let stream: TokenStream = Box::new(tokens.into_iter());
        assert_eq!(into_words(stream), vec!["dia".to_string()]);
    }
}

//! Stop filter implementation.
//!
//! Removes high-frequency, low-information words ("de", "um", "the") from the
//! token stream. Lists are the NLTK lists shipped by the `stop-words` crate,
//! keyed by language, and are frozen into a shared set when the filter is
//! built. Opinion words such as "bom", "mal" or "nunca" are not on them.
//!
//! # Examples
//!
//! ```
//! use sentia::analysis::token_filter::Filter;
//! use sentia::analysis::token_filter::stop::StopFilter;
//! use sentia::analysis::token::Token;
//! use sentia::config::Language;
//!
//! let filter = StopFilter::for_language(Language::Portuguese);
//! let tokens = vec![
//!     Token::new("que", 0),
//!     Token::new("jogo", 1),
//!     Token::new("lindo", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "jogo");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::config::Language;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// Matching is exact: the pipeline lowercases text before this filter runs,
/// and every list word is lowercased when the set is built. Order of the
/// surviving tokens is preserved, and an input made only of stopwords yields
/// an empty stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the Portuguese stop words.
    pub fn new() -> Self {
        Self::for_language(Language::Portuguese)
    }

    /// Create a stop filter with the stopword list of a language.
    pub fn for_language(language: Language) -> Self {
        Self::from_words(stop_words::get(language.stopword_language()))
    }

    /// Create a stop filter with a language list plus extra words.
    pub fn for_language_with_extra<I, S>(language: Language, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = stop_words::get(language.stopword_language())
            .into_iter()
            .chain(extra.into_iter().map(Into::into));
        Self::from_words(words)
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use sentia::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "BAR", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// assert!(filter.is_stop_word("bar"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.into().to_lowercase())
            .collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Keep the words that are not stopwords, in their original order.
    pub fn filter_words(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|word| !self.is_stop_word(word))
            .cloned()
            .collect()
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the whole string before it reaches the
//! tokenizer. The tweet normalizer is nothing more than an ordered chain of
//! them.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement or removal
//! - [`punctuation::PunctuationCharFilter`] - Drops ASCII punctuation
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`trim::TrimCharFilter`] - Strips leading and trailing whitespace
//!
//! # Examples
//!
//! ```
//! use sentia::analysis::char_filter::CharFilter;
//! use sentia::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::removal(r"@\S+").unwrap();
//! assert_eq!(filter.filter("oi @maria tudo bem"), "oi  tudo bem");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod punctuation;
pub mod trim;

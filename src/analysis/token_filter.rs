//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream. The tweet pipeline uses two of them, in this order:
//!
//! ```text
//! Tokenizer → Stop words → Stemmer → Stems
//! ```
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stopwords
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Examples
//!
//! ```
//! use sentia::analysis::token_filter::Filter;
//! use sentia::analysis::token_filter::stop::StopFilter;
//! use sentia::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["de", "um"]);
//! let tokens = vec![Token::new("copo", 0), Token::new("de", 1), Token::new("leite", 2)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered[1].text, "leite");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stem;
pub mod stop;

pub use stem::{IdentityStemmer, SnowballStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;

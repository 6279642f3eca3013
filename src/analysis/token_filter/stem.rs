//! Stemming token filter and stemmer implementations.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::config::{Language, StemmerKind};
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod snowball;

pub use identity::IdentityStemmer;
pub use snowball::SnowballStemmer;

/// Build the stemmer selected in the configuration.
pub fn stemmer_for(kind: StemmerKind, language: Language) -> Arc<dyn Stemmer> {
    match kind {
        StemmerKind::Snowball => Arc::new(SnowballStemmer::new(language)),
        StemmerKind::Identity => Arc::new(IdentityStemmer::new()),
    }
}

/// Filter that replaces every token by its stem.
///
/// The filter maps tokens one to one: it never merges, drops or reorders
/// them. Stopped tokens pass through untouched.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl Debug for StemFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Portuguese Snowball stemmer.
    pub fn new() -> Self {
        Self::with_stemmer(Arc::new(SnowballStemmer::new(Language::Portuguese)))
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Stem a single word, keeping the word when the stemmer reduces it to nothing.
    pub fn stem_word(&self, word: &str) -> String {
        let stemmed = self.stemmer.stem(word);
        if stemmed.is_empty() {
            word.to_string()
        } else {
            stemmed
        }
    }

    /// Stem every word of a sequence, one to one.
    pub fn stem_words(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|word| self.stem_word(word)).collect()
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let stemmed = self.stem_word(&token.text);
                    token.with_text(stemmed)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stem_filter() {
        let filter =
            StemFilter::with_stemmer(Arc::new(SnowballStemmer::new(Language::English)));
        let tokens = vec![
            Token::new("running", 0),
            Token::new("flies", 1),
            Token::new("testing", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "fli");
        assert_eq!(result[2].text, "testing"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_stem_words_preserves_count_and_order() {
        let filter = StemFilter::new();
        let words: Vec<String> = ["correndo", "2024", "x", "felizes", "felizes"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let stems = filter.stem_words(&words);

        assert_eq!(stems.len(), words.len());
        assert_eq!(stems[1], "2024");
        assert_eq!(stems[2], "x");
        assert_eq!(stems[3], stems[4]);
    }

    #[test]
    fn test_empty_stem_falls_back_to_word() {
        struct Eraser;
        impl Stemmer for Eraser {
            fn stem(&self, _word: &str) -> String {
                String::new()
            }
            fn name(&self) -> &'static str {
                "eraser"
            }
        }

        let filter = StemFilter::with_stemmer(Arc::new(Eraser));
        assert_eq!(filter.stem_word("casa"), "casa");
    }

    #[test]
    fn test_stemmer_for_kind() {
        assert_eq!(
            stemmer_for(StemmerKind::Identity, Language::Portuguese).name(),
            "identity"
        );
        assert_eq!(
            stemmer_for(StemmerKind::Snowball, Language::Portuguese).name(),
            "snowball"
        );
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}

//! Snowball stemmer backed by the `rust-stemmers` crate.

use rust_stemmers::Algorithm;

use crate::analysis::token_filter::stem::Stemmer;
use crate::config::Language;

/// Language-specific Snowball stemmer.
///
/// Tokens the algorithm cannot reduce (numbers, very short words, words
/// already in stem form) come back unchanged.
pub struct SnowballStemmer {
    language: Language,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        let algorithm: Algorithm = language.stemming_algorithm();
        SnowballStemmer {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

//! Tweet analyzer: the preprocessing chain of the sentiment pipeline.
//!
//! ```text
//! raw tweet → TextNormalizer → WhitespaceTokenizer → StopFilter → StemFilter
//! ```
//!
//! Besides the one-shot [`Analyzer::analyze`], the stages are exposed one by
//! one so the training pipeline can keep the intermediate corpora.
//!
//! # Examples
//!
//! ```
//! use sentia::analysis::analyzer::TweetAnalyzer;
//! use sentia::config::{PipelineConfig, StemmerKind};
//!
//! let config = PipelineConfig::default().with_stemmer(StemmerKind::Identity);
//! let analyzer = TweetAnalyzer::from_config(&config).unwrap();
//!
//! let stems = analyzer.stems("RT @ana Que filme MARAVILHOSO!! http://t.co/x").unwrap();
//! assert_eq!(stems, vec!["filme", "maravilhoso"]);
//! ```

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token::{self, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stem::{StemFilter, stemmer_for};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::config::PipelineConfig;
use crate::error::Result;

/// Preprocessing chain for tweets.
#[derive(Clone)]
pub struct TweetAnalyzer {
    normalizer: Arc<TextNormalizer>,
    tokenizer: Arc<WhitespaceTokenizer>,
    stop_filter: Arc<StopFilter>,
    stem_filter: Arc<StemFilter>,
    inner: PipelineAnalyzer,
}

impl TweetAnalyzer {
    /// Create the default analyzer (Portuguese, Snowball stemming).
    pub fn new() -> Result<Self> {
        Self::from_config(&PipelineConfig::default())
    }

    /// Build the chain described by a configuration.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let normalizer = Arc::new(TextNormalizer::from_config(&config.normalizer)?);
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let stop_filter = Arc::new(StopFilter::for_language_with_extra(
            config.language,
            config.extra_stopwords.iter().cloned(),
        ));
        let stem_filter = Arc::new(StemFilter::with_stemmer(stemmer_for(
            config.stemmer,
            config.language,
        )));

        let inner = PipelineAnalyzer::new(tokenizer.clone())
            .add_char_filter(normalizer.clone())
            .add_filter(stop_filter.clone())
            .add_filter(stem_filter.clone())
            .with_name(format!("tweet_{}", config.language.as_str()));

        Ok(Self {
            normalizer,
            tokenizer,
            stop_filter,
            stem_filter,
            inner,
        })
    }

    /// Stage 1: clean the raw text.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Stage 2: split normalized text on whitespace and drop stopwords.
    pub fn remove_stopwords(&self, normalized: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(normalized)?;
        Ok(token::into_words(self.stop_filter.filter(tokens)?))
    }

    /// Stage 3: stem every word, one to one.
    pub fn stem(&self, words: &[String]) -> Vec<String> {
        self.stem_filter.stem_words(words)
    }

    /// All stages at once: raw text to stems.
    pub fn stems(&self, text: &str) -> Result<Vec<String>> {
        Ok(token::into_words(self.analyze(text)?))
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    pub fn stem_filter(&self) -> &StemFilter {
        &self.stem_filter
    }
}

impl Analyzer for TweetAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "tweet"
    }
}

impl Debug for TweetAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweetAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

//! Tweet text normalizer.
//!
//! [`TextNormalizer`] is an ordered chain of char filters that turns a raw
//! tweet into clean, lowercase text:
//!
//! ```text
//! remove links → remove @mentions → remove RT markers → trim
//!     → drop punctuation → lowercase → trim
//! ```
//!
//! The trailing trim makes the normalizer idempotent for text such as
//! `"bom dia !"`, where dropping the `!` leaves a dangling space.
//!
//! # Examples
//!
//! ```
//! use sentia::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! let text = normalizer.normalize("RT @user check http://x.co now!");
//! assert_eq!(text, "check  now");
//! ```

use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::punctuation::PunctuationCharFilter;
use crate::analysis::char_filter::trim::TrimCharFilter;
use crate::config::NormalizerConfig;
use crate::error::Result;

/// Cleans raw tweet text before tokenization.
#[derive(Clone)]
pub struct TextNormalizer {
    filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create a normalizer with the default tweet patterns.
    pub fn new() -> Result<Self> {
        Self::from_config(&NormalizerConfig::default())
    }

    /// Create a normalizer from configured removal patterns.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let filters: Vec<Arc<dyn CharFilter>> = vec![
            Arc::new(PatternReplaceCharFilter::removal(&config.url_pattern)?),
            Arc::new(PatternReplaceCharFilter::removal(&config.mention_pattern)?),
            Arc::new(PatternReplaceCharFilter::removal(&config.retweet_pattern)?),
            Arc::new(TrimCharFilter::new()),
            Arc::new(PunctuationCharFilter::new()),
            Arc::new(LowercaseCharFilter::new()),
            Arc::new(TrimCharFilter::new()),
        ];
        Ok(Self { filters })
    }

    /// Normalize raw text. Empty or whitespace-only input yields `""`.
    pub fn normalize(&self, text: &str) -> String {
        self.filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc))
    }

    /// Normalize anything with a string representation.
    pub fn normalize_display<T: Display + ?Sized>(&self, value: &T) -> String {
        self.normalize(&value.to_string())
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl CharFilter for TextNormalizer {
    fn filter(&self, input: &str) -> String {
        self.normalize(input)
    }

    fn name(&self) -> &'static str {
        "tweet_normalizer"
    }
}

impl Debug for TextNormalizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("filters", &self.filter_names())
            .finish()
    }
}

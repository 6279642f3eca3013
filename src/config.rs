//! Pipeline configuration.
//!
//! [`PipelineConfig`] collects every tunable of the preprocessing and
//! classification pipeline. It is plain serde data with sensible defaults
//! (Portuguese tweets, Snowball stemming, expected-likelihood smoothing), so
//! it can be built in code or loaded from a JSON file.
//!
//! # Examples
//!
//! ```
//! use sentia::config::{Language, PipelineConfig};
//!
//! let config = PipelineConfig::default();
//! assert_eq!(config.language, Language::Portuguese);
//! assert_eq!(config.smoothing, 0.5);
//! assert!(config.validate().is_ok());
//! ```

use std::fs;
use std::path::Path;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

use crate::error::{Result, SentiaError};

/// Natural languages with both a stopword list and a Snowball stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Hungarian,
    Italian,
    Norwegian,
    #[default]
    Portuguese,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    /// Stopword list identifier in the `stop-words` crate.
    pub fn stopword_language(&self) -> LANGUAGE {
        match self {
            Language::Danish => LANGUAGE::Danish,
            Language::Dutch => LANGUAGE::Dutch,
            Language::English => LANGUAGE::English,
            Language::Finnish => LANGUAGE::Finnish,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Italian => LANGUAGE::Italian,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Russian => LANGUAGE::Russian,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Turkish => LANGUAGE::Turkish,
        }
    }

    /// Snowball algorithm in the `rust-stemmers` crate.
    pub fn stemming_algorithm(&self) -> Algorithm {
        match self {
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::Finnish => Algorithm::Finnish,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
            Language::Turkish => Algorithm::Turkish,
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Hungarian => "hungarian",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
            Language::Turkish => "turkish",
        }
    }
}

/// Which stemmer the pipeline applies after stopword removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Snowball stemmer for the configured language.
    #[default]
    Snowball,
    /// Leave tokens untouched.
    Identity,
}

/// Removal patterns applied by the text normalizer, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Links. Case-insensitive so `HTTP://` cannot survive lowercasing.
    pub url_pattern: String,
    /// User mentions.
    pub mention_pattern: String,
    /// Retweet markers.
    pub retweet_pattern: String,
}

impl Default for NormalizerConfig {
    /// Links match case-insensitively, unlike a plain `http\S+`. Set
    /// `url_pattern` to `http\S+` to leave upper-case links in place.
    fn default() -> Self {
        Self {
            url_pattern: r"(?i)http\S+".to_string(),
            mention_pattern: r"@\S+".to_string(),
            retweet_pattern: r"RT+".to_string(),
        }
    }
}

/// Configuration for the whole preprocessing and classification pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Language of the stopword list and of the stemmer.
    pub language: Language,
    /// Words removed in addition to the language's stopword list.
    pub extra_stopwords: Vec<String>,
    /// Stemming strategy.
    pub stemmer: StemmerKind,
    /// Lidstone smoothing constant of the Naive Bayes estimator.
    pub smoothing: f64,
    /// Run normalization, stopword removal and stemming on the rayon pool.
    pub parallel: bool,
    /// Text normalizer patterns.
    pub normalizer: NormalizerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: Language::Portuguese,
            extra_stopwords: Vec::new(),
            stemmer: StemmerKind::Snowball,
            smoothing: 0.5,
            parallel: false,
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(SentiaError::invalid_config(format!(
                "smoothing must be a positive finite number, got {}",
                self.smoothing
            )));
        }
        Ok(())
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.language, Language::Portuguese);
        assert_eq!(config.stemmer, StemmerKind::Snowball);
        assert!(!config.parallel);
        assert!(config.extra_stopwords.is_empty());
    }

    #[test]
    fn test_invalid_smoothing() {
        assert!(PipelineConfig::default().with_smoothing(0.0).validate().is_err());
        assert!(PipelineConfig::default().with_smoothing(-1.0).validate().is_err());
        assert!(
            PipelineConfig::default()
                .with_smoothing(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(PipelineConfig::default().with_smoothing(1.0).validate().is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"language": "english", "stemmer": "identity", "extra_stopwords": ["lol"]}}"#
        )
        .unwrap();

        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.stemmer, StemmerKind::Identity);
        assert_eq!(config.extra_stopwords, vec!["lol".to_string()]);
        assert_eq!(config.smoothing, 0.5);
        assert_eq!(config.normalizer, NormalizerConfig::default());
    }

    #[test]
    fn test_load_rejects_bad_smoothing() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"smoothing": 0}}"#).unwrap();

        let err = PipelineConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SentiaError::Config(_)));
    }

    #[test]
    fn test_language_names_round_trip() {
        for language in [Language::Portuguese, Language::English, Language::Spanish] {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{}\"", language.as_str()));
        }
    }
}

//! # Sentia
//!
//! Tweet preprocessing and Naive Bayes sentiment classification for Rust.
//!
//! ## Features
//!
//! - Tweet normalization (URLs, mentions, retweet markers, punctuation, case)
//! - Language-keyed stopword removal and Snowball stemming
//! - Deterministic vocabulary and boolean presence features
//! - Naive Bayes with Lidstone smoothing and stable log-space posteriors
//! - Optional parallel preprocessing

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod ml;
pub mod pipeline;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, TweetAnalyzer};
    pub use crate::config::{Language, PipelineConfig, StemmerKind};
    pub use crate::error::{Result, SentiaError};
    pub use crate::ml::classification::ClassificationResult;
    pub use crate::ml::features::{FeatureExtractor, FeatureVector};
    pub use crate::ml::naive_bayes::{NaiveBayesModel, NaiveBayesTrainer};
    pub use crate::ml::sample::{Labeled, LabeledSample};
    pub use crate::ml::vocabulary::{FrequencyDistribution, Vocabulary};
    pub use crate::pipeline::{SentimentModel, SentimentPipeline, TrainingSet};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

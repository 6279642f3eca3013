//! Analyzer implementations that combine char filters, tokenizers and filters.
//!
//! - [`PipelineAnalyzer`] - Any char filters + tokenizer + token filters
//! - [`TweetAnalyzer`] - The tweet chain: normalizer, whitespace split,
//!   stopwords, stemming

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;
pub mod tweet;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use tweet::TweetAnalyzer;

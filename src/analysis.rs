//! Text analysis module for Sentia.
//!
//! Turns raw tweet text into stems in three steps: char filters clean the
//! string, a tokenizer splits it, and token filters drop stopwords and stem
//! what is left.
//!
//! ```text
//! Raw text → Char filters → Tokenizer → Stop filter → Stem filter → Stems
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

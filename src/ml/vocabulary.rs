//! Word frequencies and the global feature vocabulary.
//!
//! The vocabulary is built exactly once per training run from the whole
//! stemmed corpus:
//!
//! ```text
//! [(stems, label)] → flatten → FrequencyDistribution → key set → Vocabulary
//! ```
//!
//! Both types remember the order in which words were first seen, so
//! membership *and* enumeration are deterministic for a given corpus.
//!
//! # Examples
//!
//! ```
//! use sentia::ml::sample::Labeled;
//! use sentia::ml::vocabulary::{extract_words, FrequencyDistribution, Vocabulary};
//!
//! let corpus = vec![
//!     Labeled::new(vec!["bom".to_string(), "dia".to_string()], "pos"),
//!     Labeled::new(vec!["bom".to_string()], "pos"),
//! ];
//!
//! let frequencies = FrequencyDistribution::from_words(extract_words(&corpus));
//! assert_eq!(frequencies.get("bom"), 2);
//!
//! let vocabulary = Vocabulary::from_distribution(&frequencies);
//! assert_eq!(vocabulary.len(), 2);
//! assert!(vocabulary.contains("dia"));
//! ```

use std::fmt;

use ahash::AHashMap;

use crate::ml::sample::Labeled;

/// Flatten every stem list of the corpus into one sequence, dropping labels.
pub fn extract_words(corpus: &[Labeled<Vec<String>>]) -> Vec<String> {
    corpus
        .iter()
        .flat_map(|sample| sample.value.iter().cloned())
        .collect()
}

/// Word counts in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyDistribution {
    entries: Vec<(String, usize)>,
    index: AHashMap<String, usize>,
    total: usize,
}

impl FrequencyDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word of a sequence.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distribution = Self::new();
        for word in words {
            distribution.add(word.as_ref());
        }
        distribution
    }

    /// Count one occurrence of a word.
    pub fn add(&mut self, word: &str) {
        self.total += 1;
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Occurrences of a word; zero when unseen.
    pub fn get(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of counted occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Distinct words in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `n` most frequent words. Ties keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // Stable sort preserves first-seen order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// The distinct stems of a training corpus, in first-seen order.
///
/// A vocabulary is immutable once built. Feature vectors and trained models
/// hold it behind an `Arc`, so it lives exactly as long as anything that
/// depends on it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    stems: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// The key set of a frequency distribution.
    pub fn from_distribution(distribution: &FrequencyDistribution) -> Self {
        Self::from_stems(distribution.keys())
    }

    /// Distinct stems of a sequence, duplicates collapsed.
    pub fn from_stems<I, S>(stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::default();
        for stem in stems {
            let stem = stem.as_ref();
            if !vocabulary.index.contains_key(stem) {
                vocabulary
                    .index
                    .insert(stem.to_string(), vocabulary.stems.len());
                vocabulary.stems.push(stem.to_string());
            }
        }
        vocabulary
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.index.contains_key(stem)
    }

    /// Position of a stem in the enumeration order.
    pub fn index_of(&self, stem: &str) -> Option<usize> {
        self.index.get(stem).copied()
    }

    /// Stem at a position of the enumeration order.
    pub fn stem(&self, index: usize) -> Option<&str> {
        self.stems.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stems.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

impl fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocabulary")
            .field("size", &self.stems.len())
            .finish()
    }
}

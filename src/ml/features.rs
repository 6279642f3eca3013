//! Boolean presence features over a frozen vocabulary.
//!
//! A [`FeatureVector`] answers, for every stem of the vocabulary, whether the
//! stem occurs in one sample (set membership, not counts). The vocabulary is
//! always an explicit input: a [`FeatureExtractor`] cannot be built without
//! one, and every vector keeps a handle to the vocabulary it was built over.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sentia::ml::features::FeatureExtractor;
//! use sentia::ml::vocabulary::Vocabulary;
//!
//! let vocabulary = Arc::new(Vocabulary::from_stems(["bom", "dia", "mau"]));
//! let extractor = FeatureExtractor::new(vocabulary).unwrap();
//!
//! let features = extractor.extract(&["bom".to_string()]);
//! assert_eq!(features.get("bom"), Some(true));
//! assert_eq!(features.get("dia"), Some(false));
//! assert_eq!(features.get("xyz"), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use bit_vec::BitVec;

use crate::error::{Result, SentiaError};
use crate::ml::sample::Labeled;
use crate::ml::vocabulary::Vocabulary;

/// Presence bits of one sample, indexed by the vocabulary's enumeration order.
#[derive(Clone)]
pub struct FeatureVector {
    vocabulary: Arc<Vocabulary>,
    bits: BitVec,
}

impl FeatureVector {
    /// Build a vector from a stem → presence map.
    ///
    /// Vocabulary stems missing from the map are `false`; map keys outside
    /// the vocabulary are ignored.
    pub fn from_map(vocabulary: Arc<Vocabulary>, values: &HashMap<String, bool>) -> Self {
        let mut bits = BitVec::from_elem(vocabulary.len(), false);
        for (index, stem) in vocabulary.iter().enumerate() {
            if values.get(stem).copied().unwrap_or(false) {
                bits.set(index, true);
            }
        }
        Self { vocabulary, bits }
    }

    /// The vocabulary this vector is indexed by.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Presence of a stem, or `None` when the stem is not in the vocabulary.
    pub fn get(&self, stem: &str) -> Option<bool> {
        self.vocabulary
            .index_of(stem)
            .and_then(|index| self.bits.get(index))
    }

    /// Presence by vocabulary position. Out-of-range positions are absent.
    pub fn is_present(&self, index: usize) -> bool {
        self.bits.get(index).unwrap_or(false)
    }

    /// Width of the vector, equal to the vocabulary size.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of stems present in the sample.
    pub fn count_present(&self) -> usize {
        self.bits.iter().filter(|present| *present).count()
    }

    /// `(stem, present)` for every vocabulary stem, in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.vocabulary.iter().zip(self.bits.iter())
    }

    /// Stems present in the sample, in vocabulary order.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter_map(|(stem, present)| present.then_some(stem))
    }

    /// Vocabulary positions of the stems present in the sample.
    pub fn present_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(index, present)| present.then_some(index))
    }

    /// The vector as a plain stem → presence map.
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.iter()
            .map(|(stem, present)| (stem.to_string(), present))
            .collect()
    }

    /// Whether both vectors are indexed by the same vocabulary.
    pub fn shares_vocabulary(&self, vocabulary: &Arc<Vocabulary>) -> bool {
        Arc::ptr_eq(&self.vocabulary, vocabulary) || *self.vocabulary == **vocabulary
    }

    /// Re-index this vector by another vocabulary.
    ///
    /// Stems of `target` this vector does not know are `false`; stems only
    /// this vector knows are dropped.
    pub fn realign(&self, target: &Arc<Vocabulary>) -> FeatureVector {
        let mut bits = BitVec::from_elem(target.len(), false);
        for (index, stem) in target.iter().enumerate() {
            if self.get(stem).unwrap_or(false) {
                bits.set(index, true);
            }
        }
        FeatureVector {
            vocabulary: Arc::clone(target),
            bits,
        }
    }
}

impl PartialEq for FeatureVector {
    fn eq(&self, other: &Self) -> bool {
        self.shares_vocabulary(&other.vocabulary) && self.bits == other.bits
    }
}

impl fmt::Debug for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureVector")
            .field("width", &self.bits.len())
            .field("present", &self.present().collect::<Vec<_>>())
            .finish()
    }
}

/// Maps stem lists to feature vectors over one frozen vocabulary.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    vocabulary: Arc<Vocabulary>,
}

impl FeatureExtractor {
    /// Create an extractor. An empty vocabulary is a usage error: it means the
    /// vocabulary builder has not run, or the corpus had no words at all.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(SentiaError::vocabulary(
                "cannot extract features over an empty vocabulary",
            ));
        }
        Ok(Self { vocabulary })
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Presence vector of one sample's stems.
    pub fn extract(&self, stems: &[String]) -> FeatureVector {
        let document: AHashSet<&str> = stems.iter().map(String::as_str).collect();
        let mut bits = BitVec::from_elem(self.vocabulary.len(), false);
        for (index, stem) in self.vocabulary.iter().enumerate() {
            if document.contains(stem) {
                bits.set(index, true);
            }
        }
        FeatureVector {
            vocabulary: Arc::clone(&self.vocabulary),
            bits,
        }
    }

    /// Lazily featurize a labeled corpus.
    ///
    /// Vectors are built one at a time as the iterator is consumed, so a
    /// trainer can stream through a large corpus without holding every
    /// vector in memory.
    pub fn extract_all<'a, I>(&'a self, corpus: I) -> impl Iterator<Item = Labeled<FeatureVector>> + 'a
    where
        I: IntoIterator<Item = &'a Labeled<Vec<String>>>,
        I::IntoIter: 'a,
    {
        corpus
            .into_iter()
            .map(move |sample| Labeled::new(self.extract(&sample.value), sample.label.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn vocabulary() -> Arc<Vocabulary> {
        Arc::new(Vocabulary::from_stems(["bom", "dia", "mau"]))
    }

    #[test]
    fn test_presence_features() {
        let extractor = FeatureExtractor::new(vocabulary()).unwrap();
        let features = extractor.extract(&["bom".to_string()]);

        let expected: BTreeMap<String, bool> = [
            ("bom".to_string(), true),
            ("dia".to_string(), false),
            ("mau".to_string(), false),
        ]
        .into_iter()
        .collect();
        assert_eq!(features.to_map(), expected);
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn test_membership_not_counts() {
        let extractor = FeatureExtractor::new(vocabulary()).unwrap();
        let once = extractor.extract(&["dia".to_string()]);
        let twice = extractor.extract(&["dia".to_string(), "dia".to_string()]);

        assert_eq!(once, twice);
        assert_eq!(twice.count_present(), 1);
    }

    #[test]
    fn test_empty_sample_is_all_false() {
        let extractor = FeatureExtractor::new(vocabulary()).unwrap();
        let features = extractor.extract(&[]);

        assert_eq!(features.len(), 3);
        assert_eq!(features.count_present(), 0);
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let result = FeatureExtractor::new(Arc::new(Vocabulary::default()));
        assert!(matches!(result, Err(SentiaError::Vocabulary(_))));
    }

    #[test]
    fn test_extract_all_is_lazy() {
        let extractor = FeatureExtractor::new(vocabulary()).unwrap();
        let corpus = vec![
            Labeled::new(vec!["bom".to_string()], "pos"),
            Labeled::new(vec!["mau".to_string()], "neg"),
        ];
        let pulled = Cell::new(0);

        let mut features = extractor
            .extract_all(corpus.iter().inspect(|_| pulled.set(pulled.get() + 1)));
        assert_eq!(pulled.get(), 0);

        let first = features.next().unwrap();
        assert_eq!(pulled.get(), 1);
        assert_eq!(first.label, "pos");
        assert_eq!(first.value.get("bom"), Some(true));

        let second = features.next().unwrap();
        assert_eq!(second.label, "neg");
        assert!(features.next().is_none());
    }

    #[test]
    fn test_from_map_zero_fills() {
        let values: HashMap<String, bool> =
            [("dia".to_string(), true), ("desconhecido".to_string(), true)]
                .into_iter()
                .collect();
        let features = FeatureVector::from_map(vocabulary(), &values);

        assert_eq!(features.present().collect::<Vec<_>>(), vec!["dia"]);
        assert_eq!(features.get("bom"), Some(false));
    }

    #[test]
    fn test_realign() {
        let extractor = FeatureExtractor::new(vocabulary()).unwrap();
        let features = extractor.extract(&["bom".to_string(), "mau".to_string()]);
        let other = Arc::new(Vocabulary::from_stems(["mau", "novo"]));

        let aligned = features.realign(&other);

        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned.get("mau"), Some(true));
        assert_eq!(aligned.get("novo"), Some(false));
        assert!(aligned.shares_vocabulary(&other));
        assert!(!features.shares_vocabulary(&other));
    }
}

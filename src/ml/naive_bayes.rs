//! Naive Bayes over boolean presence features.
//!
//! Training is a single counting pass over `(FeatureVector, label)` pairs.
//! Every probability is a Lidstone estimate with additive constant γ
//! (0.5 by default, the expected-likelihood estimate):
//!
//! ```text
//! P(label)             = (count(label) + γ) / (N + γ·L)
//! P(f = v | label)     = (count(label, f = v) + γ) / (count(label) + γ·B_f)
//! ```
//!
//! where `N` is the number of samples, `L` the number of labels and `B_f` the
//! number of distinct values feature `f` took in training (1 or 2). No
//! combination of label, feature and value ends up with probability zero.
//!
//! Classification sums log probabilities and normalizes them with
//! log-sum-exp, so the posterior is stable for large vocabularies.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use bit_vec::BitVec;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiaError};
use crate::ml::classification::ClassificationResult;
use crate::ml::features::FeatureVector;
use crate::ml::sample::Labeled;
use crate::ml::vocabulary::Vocabulary;

/// Default Lidstone constant (expected-likelihood estimation).
pub const DEFAULT_SMOOTHING: f64 = 0.5;

/// Relative tolerance under which two label scores count as a tie.
const TIE_TOLERANCE: f64 = 1e-12;

/// Counts the training corpus and produces a [`NaiveBayesModel`].
#[derive(Debug, Clone, Copy)]
pub struct NaiveBayesTrainer {
    smoothing: f64,
}

impl Default for NaiveBayesTrainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-label counts gathered during training.
struct LabelCounts {
    samples: usize,
    present: Vec<usize>,
}

impl NaiveBayesTrainer {
    pub fn new() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    /// Set the Lidstone constant γ. Checked when training starts.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Train a model in one pass over labeled feature vectors.
    ///
    /// Fails when the input is empty, when it carries fewer than two distinct
    /// labels, when the vectors were built over different vocabularies, or
    /// when the smoothing constant is not a positive finite number.
    pub fn train<I>(&self, samples: I) -> Result<NaiveBayesModel>
    where
        I: IntoIterator<Item = Labeled<FeatureVector>>,
    {
        let gamma = self.smoothing;
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(SentiaError::training(format!(
                "smoothing must be a positive finite number, got {gamma}"
            )));
        }

        let mut vocabulary: Option<Arc<Vocabulary>> = None;
        let mut counts: BTreeMap<String, LabelCounts> = BTreeMap::new();
        let mut seen_present = BitVec::new();
        let mut seen_absent = BitVec::new();
        let mut total = 0usize;

        for sample in samples {
            let features = sample.value;
            if vocabulary.is_none() {
                seen_present = BitVec::from_elem(features.len(), false);
                seen_absent = BitVec::from_elem(features.len(), false);
                vocabulary = Some(Arc::clone(features.vocabulary()));
            }
            let width = match &vocabulary {
                Some(known) if features.shares_vocabulary(known) => known.len(),
                _ => {
                    return Err(SentiaError::vocabulary(
                        "training vectors were built over different vocabularies",
                    ));
                }
            };

            let entry = counts.entry(sample.label).or_insert_with(|| LabelCounts {
                samples: 0,
                present: vec![0; width],
            });
            entry.samples += 1;
            for index in 0..width {
                if features.is_present(index) {
                    entry.present[index] += 1;
                    seen_present.set(index, true);
                } else {
                    seen_absent.set(index, true);
                }
            }
            total += 1;
        }

        let vocabulary = match vocabulary {
            Some(vocabulary) if total > 0 => vocabulary,
            _ => return Err(SentiaError::training("cannot train on an empty corpus")),
        };
        if counts.len() < 2 {
            return Err(SentiaError::training(format!(
                "training needs at least two distinct labels, found {}",
                counts.len()
            )));
        }

        let width = vocabulary.len();
        let label_total = counts.len() as f64;
        let mut labels = Vec::with_capacity(counts.len());
        let mut label_counts = Vec::with_capacity(counts.len());
        let mut log_priors = Vec::with_capacity(counts.len());
        let mut log_present = Vec::with_capacity(counts.len() * width);
        let mut log_absent = Vec::with_capacity(counts.len() * width);

        for (label, label_count) in counts {
            let n = label_count.samples as f64;
            log_priors.push(((n + gamma) / (total as f64 + gamma * label_total)).ln());
            for (index, &present) in label_count.present.iter().enumerate() {
                let bins = usize::from(seen_present.get(index).unwrap_or(false))
                    + usize::from(seen_absent.get(index).unwrap_or(false));
                let denominator = n + gamma * bins as f64;
                let absent = label_count.samples - present;
                log_present.push(((present as f64 + gamma) / denominator).ln());
                log_absent.push(((absent as f64 + gamma) / denominator).ln());
            }
            labels.push(label);
            label_counts.push(label_count.samples);
        }

        // Score of the all-absent vector; present features add their delta.
        let log_base = (0..labels.len())
            .map(|l| log_priors[l] + log_absent[l * width..(l + 1) * width].iter().sum::<f64>())
            .collect();

        log::debug!(
            "trained naive bayes on {} samples, {} labels, {} features",
            total,
            labels.len(),
            width
        );

        Ok(NaiveBayesModel {
            vocabulary,
            labels,
            label_counts,
            log_priors,
            log_present,
            log_absent,
            log_base,
            seen_present,
            seen_absent,
            smoothing: gamma,
            samples: total,
        })
    }
}

/// A trained Naive Bayes classifier. Immutable once built.
#[derive(Clone)]
pub struct NaiveBayesModel {
    vocabulary: Arc<Vocabulary>,
    /// Sorted, so ties resolve to the smallest label.
    labels: Vec<String>,
    label_counts: Vec<usize>,
    log_priors: Vec<f64>,
    /// `[label * width + feature]`
    log_present: Vec<f64>,
    log_absent: Vec<f64>,
    log_base: Vec<f64>,
    seen_present: BitVec,
    seen_absent: BitVec,
    smoothing: f64,
    samples: usize,
}

impl NaiveBayesModel {
    /// Posterior over every label, plus the most likely one.
    pub fn prob_classify(&self, features: &FeatureVector) -> Result<ClassificationResult> {
        let scores = self.log_scores(features);
        let best = self.argmax(&scores);

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|score| (score - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(SentiaError::classification(format!(
                "posterior could not be normalized (sum = {sum})"
            )));
        }

        let probabilities = self
            .labels
            .iter()
            .zip(exps)
            .map(|(label, e)| (label.clone(), e / sum))
            .collect();
        Ok(ClassificationResult::new(
            self.labels[best].clone(),
            probabilities,
        ))
    }

    /// The most likely label.
    pub fn classify(&self, features: &FeatureVector) -> Result<String> {
        let scores = self.log_scores(features);
        Ok(self.labels[self.argmax(&scores)].clone())
    }

    /// Posterior for a plain stem → presence map.
    ///
    /// Vocabulary stems missing from the map count as absent and keys the
    /// model never saw are ignored.
    pub fn prob_classify_map(&self, values: &HashMap<String, bool>) -> Result<ClassificationResult> {
        let unknown = values
            .keys()
            .filter(|stem| !self.vocabulary.contains(stem))
            .count();
        if unknown > 0 {
            log::debug!("ignoring {unknown} stems unknown to the model");
        }
        let features = FeatureVector::from_map(Arc::clone(&self.vocabulary), values);
        self.prob_classify(&features)
    }

    /// The most likely label for a plain stem → presence map.
    pub fn classify_map(&self, values: &HashMap<String, bool>) -> Result<String> {
        Ok(self.prob_classify_map(values)?.label)
    }

    /// Labels seen in training, sorted.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The vocabulary the model was trained against.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Number of training samples.
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Number of training samples carrying a label.
    pub fn label_count(&self, label: &str) -> usize {
        self.label_index(label)
            .map(|l| self.label_counts[l])
            .unwrap_or(0)
    }

    /// Smoothed prior of a label.
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.label_index(label).map(|l| self.log_priors[l].exp())
    }

    /// Smoothed `P(stem = present | label)`.
    pub fn likelihood(&self, label: &str, stem: &str, present: bool) -> Option<f64> {
        let l = self.label_index(label)?;
        let f = self.vocabulary.index_of(stem)?;
        Some(self.log_likelihood(l, f, present).exp())
    }

    /// Features whose likelihood differs the most between labels.
    ///
    /// For every `(stem, value)` observed in training, the ratio of the
    /// largest to the smallest per-label likelihood. Sorted by descending
    /// ratio; equal ratios keep vocabulary order.
    pub fn most_informative_features(&self, n: usize) -> Vec<InformativeFeature> {
        let mut features = Vec::new();
        for (index, stem) in self.vocabulary.iter().enumerate() {
            for present in [true, false] {
                let observed = if present {
                    &self.seen_present
                } else {
                    &self.seen_absent
                };
                if !observed.get(index).unwrap_or(false) {
                    continue;
                }

                let mut max = (0, f64::NEG_INFINITY);
                let mut min = (0, f64::INFINITY);
                for l in 0..self.labels.len() {
                    let log_p = self.log_likelihood(l, index, present);
                    if log_p > max.1 {
                        max = (l, log_p);
                    }
                    if log_p < min.1 {
                        min = (l, log_p);
                    }
                }

                features.push(InformativeFeature {
                    stem: stem.to_string(),
                    present,
                    ratio: (max.1 - min.1).exp(),
                    label: self.labels[max.0].clone(),
                    versus: self.labels[min.0].clone(),
                });
            }
        }

        features.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        features.truncate(n);
        features
    }

    fn label_index(&self, label: &str) -> Option<usize> {
        self.labels
            .binary_search_by(|candidate| candidate.as_str().cmp(label))
            .ok()
    }

    fn log_likelihood(&self, label: usize, feature: usize, present: bool) -> f64 {
        let slot = label * self.vocabulary.len() + feature;
        if present {
            self.log_present[slot]
        } else {
            self.log_absent[slot]
        }
    }

    /// Unnormalized log posterior of every label.
    fn log_scores(&self, features: &FeatureVector) -> Vec<f64> {
        if features.shares_vocabulary(&self.vocabulary) {
            return self.aligned_scores(features);
        }

        let input = features.vocabulary();
        let unknown = input
            .iter()
            .filter(|stem| !self.vocabulary.contains(stem))
            .count();
        let missing = self
            .vocabulary
            .iter()
            .filter(|stem| !input.contains(stem))
            .count();
        log::warn!(
            "feature vector built over a different vocabulary: {missing} model stems treated as absent, {unknown} unknown stems ignored"
        );
        self.aligned_scores(&features.realign(&self.vocabulary))
    }

    fn aligned_scores(&self, features: &FeatureVector) -> Vec<f64> {
        let mut scores = self.log_base.clone();
        for index in features.present_indices() {
            for (l, score) in scores.iter_mut().enumerate() {
                *score += self.log_likelihood(l, index, true) - self.log_likelihood(l, index, false);
            }
        }
        scores
    }

    /// Index of the best score. Near-equal scores go to the earlier, i.e.
    /// lexicographically smaller, label.
    fn argmax(&self, scores: &[f64]) -> usize {
        let mut best = 0;
        for (l, &score) in scores.iter().enumerate().skip(1) {
            let tolerance = TIE_TOLERANCE * scores[best].abs().max(1.0);
            if score.partial_cmp(&(scores[best] + tolerance)) == Some(Ordering::Greater) {
                best = l;
            }
        }
        best
    }
}

impl fmt::Debug for NaiveBayesModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesModel")
            .field("labels", &self.labels)
            .field("vocabulary_size", &self.vocabulary.len())
            .field("samples", &self.samples)
            .field("smoothing", &self.smoothing)
            .finish()
    }
}

/// One entry of [`NaiveBayesModel::most_informative_features`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InformativeFeature {
    pub stem: String,
    pub present: bool,
    /// Largest over smallest per-label likelihood.
    pub ratio: f64,
    /// Label with the largest likelihood.
    pub label: String,
    /// Label with the smallest likelihood.
    pub versus: String,
}

impl fmt::Display for InformativeFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {:<5}  {} : {} = {:.1} : 1.0",
            self.stem, self.present, self.label, self.versus, self.ratio
        )
    }
}

//! The end-to-end sentiment pipeline.
//!
//! Training runs the stages one after another over the whole corpus, keeping
//! every label attached to its sample:
//!
//! ```text
//! [LabeledSample]
//!   → remove_punctuation   [Labeled<String>]
//!   → remove_stopwords     [Labeled<Vec<String>>]
//!   → apply_stemmer        [Labeled<Vec<String>>]
//!   → extract_words → word_frequencies → unique_words   Vocabulary
//!   → features (lazy)      [Labeled<FeatureVector>]
//!   → train                SentimentModel
//! ```
//!
//! Inference reuses stages 1 to 3 and the vocabulary frozen at training time.
//!
//! # Examples
//!
//! ```
//! use sentia::config::PipelineConfig;
//! use sentia::ml::sample::LabeledSample;
//! use sentia::pipeline::SentimentPipeline;
//!
//! let pipeline = SentimentPipeline::new(PipelineConfig::default()).unwrap();
//! let samples = vec![
//!     LabeledSample::new("Adorei o filme, maravilhoso!", "positivo"),
//!     LabeledSample::new("Odiei o filme, horrível.", "negativo"),
//! ];
//!
//! let training_set = pipeline.structure(&samples).unwrap();
//! let model = pipeline.train(&training_set).unwrap();
//!
//! let result = pipeline.classify_text(&model, "que filme maravilhoso").unwrap();
//! assert_eq!(result.label, "positivo");
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::TweetAnalyzer;
use crate::config::PipelineConfig;
use crate::error::{Result, SentiaError};
use crate::ml::classification::ClassificationResult;
use crate::ml::evaluation;
use crate::ml::features::{FeatureExtractor, FeatureVector};
use crate::ml::naive_bayes::{InformativeFeature, NaiveBayesModel, NaiveBayesTrainer};
use crate::ml::sample::{Labeled, LabeledSample};
use crate::ml::vocabulary::{self, FrequencyDistribution, Vocabulary};

/// Runs the preprocessing stages and trains sentiment models.
#[derive(Debug, Clone)]
pub struct SentimentPipeline {
    config: PipelineConfig,
    analyzer: TweetAnalyzer,
}

impl SentimentPipeline {
    /// Validate the configuration and build the analysis chain.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = TweetAnalyzer::from_config(&config)?;
        Ok(Self { config, analyzer })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &TweetAnalyzer {
        &self.analyzer
    }

    /// Stage 1: normalize every sample's text.
    pub fn remove_punctuation(&self, samples: &[LabeledSample]) -> Vec<Labeled<String>> {
        let normalize =
            |sample: &LabeledSample| Labeled::new(self.analyzer.normalize(&sample.text), sample.label.clone());
        let corpus: Vec<Labeled<String>> = if self.config.parallel {
            samples.par_iter().map(normalize).collect()
        } else {
            samples.iter().map(normalize).collect()
        };
        log::debug!("normalized {} samples", corpus.len());
        corpus
    }

    /// Stage 2: tokenize normalized text and drop stopwords.
    ///
    /// The first sample that fails aborts the batch with its error.
    pub fn remove_stopwords(&self, corpus: Vec<Labeled<String>>) -> Result<Vec<Labeled<Vec<String>>>> {
        let filter = |sample: Labeled<String>| {
            sample.try_map(|text| self.analyzer.remove_stopwords(&text))
        };
        let results: Vec<Result<Labeled<Vec<String>>>> = if self.config.parallel {
            corpus.into_par_iter().map(filter).collect()
        } else {
            corpus.into_iter().map(filter).collect()
        };
        let filtered: Vec<Labeled<Vec<String>>> = results.into_iter().collect::<Result<_>>()?;
        log::debug!(
            "removed stopwords, {} words left in {} samples",
            filtered.iter().map(|s| s.value.len()).sum::<usize>(),
            filtered.len()
        );
        Ok(filtered)
    }

    /// Stage 3: stem every word of every sample, one stem per word.
    pub fn apply_stemmer(&self, corpus: Vec<Labeled<Vec<String>>>) -> Vec<Labeled<Vec<String>>> {
        let stem = |sample: Labeled<Vec<String>>| sample.map(|words| self.analyzer.stem(&words));
        let stemmed: Vec<Labeled<Vec<String>>> = if self.config.parallel {
            corpus.into_par_iter().map(stem).collect()
        } else {
            corpus.into_iter().map(stem).collect()
        };
        log::debug!("stemmed {} samples", stemmed.len());
        stemmed
    }

    /// Flatten the stemmed corpus into one word sequence.
    pub fn extract_words(&self, corpus: &[Labeled<Vec<String>>]) -> Vec<String> {
        vocabulary::extract_words(corpus)
    }

    /// Count word occurrences.
    pub fn word_frequencies(&self, words: &[String]) -> FrequencyDistribution {
        FrequencyDistribution::from_words(words)
    }

    /// The vocabulary: the distinct words of a frequency distribution.
    pub fn unique_words(&self, frequencies: &FrequencyDistribution) -> Vocabulary {
        Vocabulary::from_distribution(frequencies)
    }

    /// Run stages 1 to 3 and build the vocabulary.
    pub fn structure(&self, samples: &[LabeledSample]) -> Result<TrainingSet> {
        let normalized = self.remove_punctuation(samples);
        let filtered = self.remove_stopwords(normalized)?;
        let corpus = self.apply_stemmer(filtered);

        let words = self.extract_words(&corpus);
        let frequencies = self.word_frequencies(&words);
        let vocabulary = Arc::new(self.unique_words(&frequencies));
        log::debug!(
            "built vocabulary of {} stems from {} words",
            vocabulary.len(),
            frequencies.total()
        );

        Ok(TrainingSet {
            corpus,
            frequencies,
            vocabulary,
        })
    }

    /// Train a model on a structured corpus.
    pub fn train(&self, training_set: &TrainingSet) -> Result<SentimentModel> {
        if training_set.is_empty() {
            return Err(SentiaError::training("cannot train on an empty corpus"));
        }
        let trainer = NaiveBayesTrainer::new().with_smoothing(self.config.smoothing);
        let classifier = trainer.train(training_set.features()?)?;
        log::info!(
            "trained sentiment model: {} samples, {} stems, labels {:?}",
            classifier.sample_count(),
            classifier.vocabulary().len(),
            classifier.labels()
        );
        SentimentModel::new(classifier, self.analyzer.clone())
    }

    /// Structure and train in one call.
    pub fn fit(&self, samples: &[LabeledSample]) -> Result<SentimentModel> {
        self.train(&self.structure(samples)?)
    }

    /// Classify raw text with a trained model.
    pub fn classify_text(&self, model: &SentimentModel, text: &str) -> Result<ClassificationResult> {
        model.classify_text(text)
    }
}

/// The stemmed training corpus and the vocabulary built from it.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    corpus: Vec<Labeled<Vec<String>>>,
    frequencies: FrequencyDistribution,
    vocabulary: Arc<Vocabulary>,
}

impl TrainingSet {
    /// Stemmed samples, in input order.
    pub fn corpus(&self) -> &[Labeled<Vec<String>>] {
        &self.corpus
    }

    pub fn frequencies(&self) -> &FrequencyDistribution {
        &self.frequencies
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Distinct labels, sorted.
    pub fn labels(&self) -> BTreeSet<&str> {
        self.corpus.iter().map(|sample| sample.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Lazily featurize the corpus over its vocabulary.
    ///
    /// Fails when the vocabulary is empty.
    pub fn features(&self) -> Result<impl Iterator<Item = Labeled<FeatureVector>> + '_> {
        let extractor = FeatureExtractor::new(Arc::clone(&self.vocabulary))?;
        Ok(self.corpus.iter().map(move |sample| {
            Labeled::new(extractor.extract(&sample.value), sample.label.clone())
        }))
    }
}

/// A trained classifier together with the analysis chain it was trained with.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    classifier: NaiveBayesModel,
    analyzer: TweetAnalyzer,
    extractor: FeatureExtractor,
}

impl SentimentModel {
    /// Pair a classifier with the analyzer that produced its training stems.
    pub fn new(classifier: NaiveBayesModel, analyzer: TweetAnalyzer) -> Result<Self> {
        let extractor = FeatureExtractor::new(Arc::clone(classifier.vocabulary()))?;
        Ok(Self {
            classifier,
            analyzer,
            extractor,
        })
    }

    /// Features of raw text over the model's vocabulary.
    pub fn features(&self, text: &str) -> Result<FeatureVector> {
        let stems = self.analyzer.stems(text)?;
        Ok(self.extractor.extract(&stems))
    }

    /// Posterior over the labels for raw text.
    pub fn classify_text(&self, text: &str) -> Result<ClassificationResult> {
        self.classifier.prob_classify(&self.features(text)?)
    }

    /// Classify a batch of texts. The first failure aborts the batch.
    pub fn classify_texts<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<ClassificationResult>> {
        texts
            .iter()
            .map(|text| self.classify_text(text.as_ref()))
            .collect()
    }

    /// Accuracy over labeled samples.
    pub fn evaluate(&self, samples: &[LabeledSample]) -> Result<f64> {
        let labeled = samples
            .iter()
            .map(|sample| {
                Ok(Labeled::new(
                    self.features(&sample.text)?,
                    sample.label.clone(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        evaluation::accuracy(&self.classifier, labeled)
    }

    pub fn most_informative_features(&self, n: usize) -> Vec<InformativeFeature> {
        self.classifier.most_informative_features(n)
    }

    pub fn classifier(&self) -> &NaiveBayesModel {
        &self.classifier
    }

    pub fn analyzer(&self) -> &TweetAnalyzer {
        &self.analyzer
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        self.classifier.vocabulary()
    }

    pub fn labels(&self) -> &[String] {
        self.classifier.labels()
    }
}

//! Learning side of the sentiment pipeline.
//!
//! Stemmed samples become a frozen [`Vocabulary`](vocabulary::Vocabulary),
//! every sample becomes a boolean [`FeatureVector`](features::FeatureVector)
//! over it, and a Naive Bayes model is trained on the labeled vectors.
//!
//! ```text
//! [(stems, label)] → Vocabulary → [(FeatureVector, label)] → NaiveBayesModel
//! ```

pub mod classification;
pub mod evaluation;
pub mod features;
pub mod naive_bayes;
pub mod sample;
pub mod vocabulary;

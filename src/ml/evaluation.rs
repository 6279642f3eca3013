//! Held-out evaluation: seeded train/test splits and accuracy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{Result, SentiaError};
use crate::ml::features::FeatureVector;
use crate::ml::naive_bayes::NaiveBayesModel;
use crate::ml::sample::Labeled;

/// Shuffle a corpus with a fixed seed and split it into `(train, test)`.
///
/// `test_ratio` must lie strictly between 0 and 1. The test side gets the
/// rounded share of the corpus, never less than one sample and never the
/// whole corpus, so both sides are non-empty. The same seed always yields
/// the same split.
pub fn train_test_split<T: Clone>(
    samples: &[T],
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(SentiaError::invalid_argument(format!(
            "test ratio must be between 0 and 1, got {test_ratio}"
        )));
    }
    if samples.len() < 2 {
        return Err(SentiaError::invalid_argument(format!(
            "cannot split {} samples into train and test sets",
            samples.len()
        )));
    }

    let mut order: Vec<usize> = (0..samples.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let test_len = ((samples.len() as f64) * test_ratio)
        .round()
        .clamp(1.0, (samples.len() - 1) as f64) as usize;
    let (test, train) = order.split_at(test_len);

    Ok((
        train.iter().map(|&i| samples[i].clone()).collect(),
        test.iter().map(|&i| samples[i].clone()).collect(),
    ))
}

/// Fraction of samples whose predicted label matches the gold label.
pub fn accuracy<I>(model: &NaiveBayesModel, samples: I) -> Result<f64>
where
    I: IntoIterator<Item = Labeled<FeatureVector>>,
{
    let mut total = 0usize;
    let mut correct = 0usize;
    for sample in samples {
        if model.classify(&sample.value)? == sample.label {
            correct += 1;
        }
        total += 1;
    }

    if total == 0 {
        return Err(SentiaError::invalid_argument(
            "cannot compute accuracy over an empty evaluation set",
        ));
    }
    Ok(correct as f64 / total as f64)
}

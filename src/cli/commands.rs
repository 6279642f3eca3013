//! Command implementations for Sentia CLI.

use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::ml::evaluation::train_test_split;
use crate::ml::sample::{LabeledSample, load_samples};
use crate::pipeline::SentimentPipeline;

/// Execute a CLI command.
pub fn execute_command(args: SentiaArgs) -> Result<()> {
    let pipeline = SentimentPipeline::new(load_config(args.config.as_deref())?)?;

    match &args.command {
        Command::Analyze(analyze_args) => {
            output_result(&analyze_text(&pipeline, analyze_args)?, &args)
        }
        Command::Vocabulary(vocabulary_args) => {
            output_result(&build_vocabulary(&pipeline, vocabulary_args)?, &args)
        }
        Command::Classify(classify_args) => {
            output_result(&classify_texts(&pipeline, classify_args)?, &args)
        }
        Command::Evaluate(evaluate_args) => {
            output_result(&evaluate_model(&pipeline, evaluate_args)?, &args)
        }
    }
}

/// Load the pipeline configuration, or the defaults when no file is given.
fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            PipelineConfig::from_file(path)
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Run the analysis chain on one text, stage by stage.
pub fn analyze_text(pipeline: &SentimentPipeline, args: &AnalyzeArgs) -> Result<AnalysisReport> {
    let analyzer = pipeline.analyzer();
    let normalized = analyzer.normalize(&args.text);
    let words = analyzer.remove_stopwords(&normalized)?;
    let stems = analyzer.stem(&words);

    Ok(AnalysisReport {
        text: args.text.clone(),
        normalized,
        words,
        stems,
    })
}

/// Structure a dataset and report its vocabulary.
pub fn build_vocabulary(
    pipeline: &SentimentPipeline,
    args: &VocabularyArgs,
) -> Result<VocabularyReport> {
    let samples = load_samples(&args.data)?;
    let training_set = pipeline.structure(&samples)?;
    let frequencies = training_set.frequencies();

    Ok(VocabularyReport {
        samples: training_set.len(),
        labels: training_set
            .labels()
            .into_iter()
            .map(String::from)
            .collect(),
        total_words: frequencies.total(),
        vocabulary_size: training_set.vocabulary().len(),
        most_common: frequencies
            .most_common(args.top)
            .into_iter()
            .map(|(stem, count)| StemCount {
                stem: stem.to_string(),
                count,
            })
            .collect(),
    })
}

/// Train on a dataset and classify every given text.
pub fn classify_texts(
    pipeline: &SentimentPipeline,
    args: &ClassifyArgs,
) -> Result<ClassificationReport> {
    let samples = load_samples(&args.data)?;
    let model = pipeline.fit(&samples)?;

    let classifications = args
        .texts
        .iter()
        .map(|text| {
            Ok(TextClassification {
                text: text.clone(),
                result: pipeline.classify_text(&model, text)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ClassificationReport { classifications })
}

/// Train on a seeded split of a dataset and score the held-out part.
pub fn evaluate_model(
    pipeline: &SentimentPipeline,
    args: &EvaluateArgs,
) -> Result<EvaluationReport> {
    let samples = load_samples(&args.data)?;
    let (train, test): (Vec<LabeledSample>, Vec<LabeledSample>) =
        train_test_split(&samples, args.test_ratio, args.seed)?;
    log::info!(
        "split {} samples into {} train and {} test",
        samples.len(),
        train.len(),
        test.len()
    );

    let model = pipeline.fit(&train)?;
    let accuracy = model.evaluate(&test)?;

    Ok(EvaluationReport {
        train_samples: train.len(),
        test_samples: test.len(),
        vocabulary_size: model.vocabulary().len(),
        accuracy,
        most_informative_features: model.most_informative_features(args.top),
    })
}

//! Integration tests for the sentiment pipeline.

use std::collections::{HashMap, HashSet};

use sentia::analysis::analyzer::{Analyzer, TweetAnalyzer};
use sentia::analysis::normalizer::TextNormalizer;
use sentia::analysis::token_filter::stop::StopFilter;
use sentia::config::{Language, PipelineConfig, StemmerKind};
use sentia::error::{Result, SentiaError};
use sentia::ml::features::FeatureExtractor;
use sentia::ml::naive_bayes::NaiveBayesTrainer;
use sentia::ml::sample::{Labeled, LabeledSample};
use sentia::ml::vocabulary::{FrequencyDistribution, Vocabulary, extract_words};
use sentia::pipeline::SentimentPipeline;
use std::sync::Arc;

fn corpus() -> Vec<LabeledSample> {
    vec![
        LabeledSample::new("Adorei o atendimento, muito rápido!", "positivo"),
        LabeledSample::new("Que produto maravilhoso @loja", "positivo"),
        LabeledSample::new("Entrega rápida e produto excelente http://t.co/a", "positivo"),
        LabeledSample::new("Recomendo, atendimento excelente", "positivo"),
        LabeledSample::new("Odiei o atendimento, demorado demais", "negativo"),
        LabeledSample::new("RT @cliente produto quebrado e entrega atrasada", "negativo"),
        LabeledSample::new("Péssimo produto, nunca mais compro", "negativo"),
        LabeledSample::new("Entrega atrasada de novo, horrível", "negativo"),
    ]
}

#[test]
fn test_normalizer_is_idempotent() -> Result<()> {
    let normalizer = TextNormalizer::new()?;
    let inputs = [
        "RT @user check http://x.co now!",
        "  Olá, MUNDO!!  ",
        "HTTPS://EXEMPLO.COM/A?b=c fim",
        "ARTE e RTRT",
        "",
        "   ",
        "sem mudanças",
        "@só @menções",
        "pontuação... no fim .",
    ];

    for input in inputs {
        let once = normalizer.normalize(input);
        assert_eq!(normalizer.normalize(&once), once, "input: {input:?}");
    }
    Ok(())
}

#[test]
fn test_retweet_mention_and_url_removed() -> Result<()> {
    let normalizer = TextNormalizer::new()?;
    let normalized = normalizer.normalize("RT @user check http://x.co now!");

    assert!(!normalized.contains("RT"));
    assert!(!normalized.contains("@user"));
    assert!(!normalized.contains("http"));
    assert!(!normalized.chars().any(|c| c.is_ascii_punctuation()));
    assert!(!normalized.chars().any(char::is_uppercase));
    Ok(())
}

#[test]
fn test_stopword_filter_properties() {
    let filter = StopFilter::for_language(Language::Portuguese);
    let words: Vec<String> = "de um jeito ou de outro a gente chega lá"
        .split_whitespace()
        .map(String::from)
        .collect();

    let kept = filter.filter_words(&words);

    assert!(kept.len() <= words.len());
    assert!(kept.iter().all(|word| !filter.is_stop_word(word)));
}

#[test]
fn test_stemmer_is_one_to_one() -> Result<()> {
    let analyzer = TweetAnalyzer::new()?;
    let words: Vec<String> = ["gatos", "correndo", "2024", "felicidade"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let stems = analyzer.stem(&words);

    assert_eq!(stems.len(), words.len());
    assert_eq!(stems[2], "2024");
    assert_eq!(stems[0], analyzer.stem(&["gato".to_string()])[0]);
    Ok(())
}

#[test]
fn test_vocabulary_and_features() -> Result<()> {
    let stemmed = vec![
        Labeled::new(vec!["bom".to_string(), "dia".to_string()], "pos"),
        Labeled::new(vec!["bom".to_string()], "pos"),
    ];
    let vocabulary = Vocabulary::from_distribution(&FrequencyDistribution::from_words(
        extract_words(&stemmed),
    ));
    let members: HashSet<&str> = vocabulary.iter().collect();
    assert_eq!(members, HashSet::from(["bom", "dia"]));

    let extractor = FeatureExtractor::new(Arc::new(Vocabulary::from_stems(["bom", "dia", "mau"])))?;
    let features = extractor.extract(&["bom".to_string()]);
    let map: HashMap<String, bool> = features.to_map().into_iter().collect();
    assert_eq!(
        map,
        HashMap::from([
            ("bom".to_string(), true),
            ("dia".to_string(), false),
            ("mau".to_string(), false),
        ])
    );
    Ok(())
}

#[test]
fn test_end_to_end_classification() -> Result<()> {
    let pipeline = SentimentPipeline::new(PipelineConfig::default())?;
    let model = pipeline.fit(&corpus())?;

    let positive = pipeline.classify_text(&model, "atendimento excelente, recomendo!")?;
    assert_eq!(positive.label, "positivo");

    let negative = pipeline.classify_text(&model, "produto quebrado, péssimo")?;
    assert_eq!(negative.label, "negativo");

    for result in [&positive, &negative] {
        let sum: f64 = result.probabilities.values().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    let json = serde_json::to_value(&positive)?;
    assert_eq!(json["classe"], "positivo");
    assert!(json["negativo"].is_number());
    Ok(())
}

#[test]
fn test_training_is_deterministic() -> Result<()> {
    let pipeline = SentimentPipeline::new(PipelineConfig::default())?;
    let first = pipeline.fit(&corpus())?;
    let second = pipeline.fit(&corpus())?;

    for text in ["entrega rápida", "entrega atrasada", "nada a ver"] {
        assert_eq!(first.classify_text(text)?, second.classify_text(text)?);
    }
    Ok(())
}

#[test]
fn test_single_label_is_rejected() -> Result<()> {
    let pipeline = SentimentPipeline::new(PipelineConfig::default())?;
    let positives: Vec<LabeledSample> = corpus()
        .into_iter()
        .filter(|sample| sample.label == "positivo")
        .collect();

    let training_set = pipeline.structure(&positives)?;
    assert!(matches!(
        pipeline.train(&training_set),
        Err(SentiaError::Training(_))
    ));
    Ok(())
}

#[test]
fn test_opinion_words_reach_the_classifier() -> Result<()> {
    let pipeline = SentimentPipeline::new(PipelineConfig::default())?;
    assert_eq!(
        pipeline.analyzer().stems("Filme bom, muito bem feito")?,
        pipeline.analyzer().stem(&[
            "filme".to_string(),
            "bom".to_string(),
            "bem".to_string(),
            "feito".to_string(),
        ])
    );
    assert_ne!(
        pipeline.analyzer().stems("Filme bom, muito bem feito")?,
        pipeline.analyzer().stems("Filme mal feito, nunca mais")?
    );

    let model = pipeline.fit(&[
        LabeledSample::new("muito bom", "positivo"),
        LabeledSample::new("muito mal", "negativo"),
    ])?;
    assert_eq!(model.vocabulary().len(), 2);
    assert_eq!(model.classify_text("filme bom")?.label, "positivo");
    assert_eq!(model.classify_text("filme mal")?.label, "negativo");
    Ok(())
}

#[test]
fn test_manual_stages_match_pipeline() -> Result<()> {
    let config = PipelineConfig::default().with_stemmer(StemmerKind::Identity);
    let pipeline = SentimentPipeline::new(config)?;
    let samples = corpus();

    let normalized = pipeline.remove_punctuation(&samples);
    let filtered = pipeline.remove_stopwords(normalized)?;
    let stemmed = pipeline.apply_stemmer(filtered);
    let words = pipeline.extract_words(&stemmed);
    let frequencies = pipeline.word_frequencies(&words);
    let vocabulary = pipeline.unique_words(&frequencies);

    let training_set = pipeline.structure(&samples)?;
    assert_eq!(training_set.corpus(), stemmed.as_slice());
    assert_eq!(**training_set.vocabulary(), vocabulary);
    assert!(vocabulary.contains("atendimento"));
    assert!(frequencies.get("produto") >= 3);

    let trained = NaiveBayesTrainer::new().train(training_set.features()?)?;
    let model = pipeline.train(&training_set)?;
    assert_eq!(trained.labels(), model.labels());
    Ok(())
}

#[test]
fn test_one_shot_and_staged_analysis_agree() -> Result<()> {
    let analyzer = TweetAnalyzer::new()?;
    for sample in corpus() {
        let staged = analyzer.stem(&analyzer.remove_stopwords(&analyzer.normalize(&sample.text))?);
        let one_shot: Vec<String> = analyzer.analyze(&sample.text)?.map(|t| t.text).collect();
        assert_eq!(staged, one_shot);
    }
    Ok(())
}

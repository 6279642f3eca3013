//! Criterion benchmarks for Sentia.
//!
//! Covers the three hot paths of the sentiment pipeline:
//! - Tweet analysis (normalize, stopwords, stemming)
//! - Structuring and training, sequential and parallel
//! - Classification of raw text with a trained model

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sentia::analysis::analyzer::{Analyzer, TweetAnalyzer};
use sentia::config::PipelineConfig;
use sentia::ml::sample::LabeledSample;
use sentia::pipeline::SentimentPipeline;
use std::hint::black_box;

/// Generate labeled tweets for benchmarking.
fn generate_test_tweets(count: usize) -> Vec<LabeledSample> {
    let positive = [
        "adorei", "maravilhoso", "incrível", "lindo", "ótimo", "perfeito", "amei", "feliz",
    ];
    let negative = [
        "odiei", "horrível", "péssimo", "triste", "terrível", "chato", "detestei", "ruim",
    ];
    let neutral = [
        "filme", "show", "viagem", "jogo", "dia", "música", "livro", "comida", "time", "cidade",
    ];

    let mut tweets = Vec::with_capacity(count);
    for i in 0..count {
        let (opinion, label) = if i % 2 == 0 {
            (&positive, "positivo")
        } else {
            (&negative, "negativo")
        };
        let tweet_length = 4 + (i % 8);
        let mut words = Vec::with_capacity(tweet_length + 3);
        words.push(format!("@user{}", i % 17));
        for j in 0..tweet_length {
            let word = if j % 3 == 0 {
                opinion[(i * 7 + j) % opinion.len()]
            } else {
                neutral[(i * 13 + j * 5) % neutral.len()]
            };
            words.push(word.to_uppercase());
        }
        words.push("o".to_string());
        words.push(format!("https://t.co/{i:x}!!"));

        tweets.push(LabeledSample::new(words.join(" "), label));
    }

    tweets
}

/// Benchmark tweet analysis.
fn bench_tweet_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("tweet_analysis");

    let analyzer = TweetAnalyzer::new().unwrap();
    let tweets = generate_test_tweets(1000);

    group.bench_function("analyze_single_tweet", |b| {
        b.iter(|| {
            let result = analyzer.analyze(black_box(&tweets[0].text));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_tweets", |b| {
        b.iter(|| {
            for tweet in tweets.iter().take(100) {
                let result = analyzer.stems(black_box(&tweet.text));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark structuring and training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);

    let tweets = generate_test_tweets(2000);
    let sequential = SentimentPipeline::new(PipelineConfig::default()).unwrap();
    let parallel = SentimentPipeline::new(PipelineConfig::default().with_parallel(true)).unwrap();

    group.throughput(Throughput::Elements(tweets.len() as u64));
    group.bench_function("structure_sequential", |b| {
        b.iter(|| black_box(sequential.structure(black_box(&tweets))))
    });

    group.bench_function("structure_parallel", |b| {
        b.iter(|| black_box(parallel.structure(black_box(&tweets))))
    });

    let training_set = sequential.structure(&tweets).unwrap();
    group.bench_function("train_naive_bayes", |b| {
        b.iter(|| black_box(sequential.train(black_box(&training_set))))
    });

    group.finish();
}

/// Benchmark classification of raw text.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let tweets = generate_test_tweets(2000);
    let pipeline = SentimentPipeline::new(PipelineConfig::default()).unwrap();
    let model = pipeline.fit(&tweets).unwrap();

    group.bench_function("classify_single_text", |b| {
        b.iter(|| black_box(model.classify_text(black_box("Que filme MARAVILHOSO, amei!"))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("classify_batch_texts", |b| {
        b.iter(|| {
            for tweet in tweets.iter().take(100) {
                let _ = black_box(model.classify_text(black_box(&tweet.text)));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tweet_analysis,
    bench_training,
    bench_classification
);
criterion_main!(benches);

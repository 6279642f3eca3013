//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentiaArgs};
use crate::error::Result;
use crate::ml::classification::ClassificationResult;
use crate::ml::naive_bayes::InformativeFeature;

/// Result structure for the `analyze` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub text: String,
    pub normalized: String,
    pub words: Vec<String>,
    pub stems: Vec<String>,
}

/// Result structure for the `vocabulary` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyReport {
    pub samples: usize,
    pub labels: Vec<String>,
    pub total_words: usize,
    pub vocabulary_size: usize,
    pub most_common: Vec<StemCount>,
}

/// One stem and its corpus frequency.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemCount {
    pub stem: String,
    pub count: usize,
}

/// One classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextClassification {
    pub text: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

/// Result structure for the `classify` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub classifications: Vec<TextClassification>,
}

/// Result structure for the `evaluate` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub train_samples: usize,
    pub test_samples: usize,
    pub vocabulary_size: usize,
    pub accuracy: f64,
    pub most_informative_features: Vec<InformativeFeature>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for AnalysisReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Analysis");
        let _ = writeln!(out, "Text:       {}", self.text);
        let _ = writeln!(out, "Normalized: {}", self.normalized);
        let _ = writeln!(out, "Words:      {}", format_list(&self.words));
        let _ = writeln!(out, "Stems:      {}", format_list(&self.stems));
        out
    }
}

impl HumanOutput for VocabularyReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Vocabulary");
        let _ = writeln!(out, "Samples: {}", self.samples);
        let _ = writeln!(out, "Labels: {}", self.labels.join(", "));
        let _ = writeln!(out, "Total words: {}", self.total_words);
        let _ = writeln!(out, "Vocabulary size: {}", self.vocabulary_size);

        if !self.most_common.is_empty() {
            out.push('\n');
            subheading(&mut out, "Most common stems");
            for entry in &self.most_common {
                let _ = writeln!(out, "  {:<20} {}", entry.stem, entry.count);
            }
        }
        out
    }
}

impl HumanOutput for ClassificationReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Classification");
        for (i, classification) in self.classifications.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", classification.text);
            let _ = writeln!(out, "  => {}", classification.result);
            for (label, probability) in classification.result.ranked() {
                let _ = writeln!(out, "     {label:<16} {probability:.4}");
            }
        }
        out
    }
}

impl HumanOutput for EvaluationReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Evaluation");
        let _ = writeln!(out, "Train samples: {}", self.train_samples);
        let _ = writeln!(out, "Test samples: {}", self.test_samples);
        let _ = writeln!(out, "Vocabulary size: {}", self.vocabulary_size);
        let _ = writeln!(out, "Accuracy: {:.2}%", self.accuracy * 100.0);

        if !self.most_informative_features.is_empty() {
            out.push('\n');
            subheading(&mut out, "Most informative features");
            for feature in &self.most_informative_features {
                let _ = writeln!(out, "  {feature}");
            }
        }
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &SentiaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", result.render_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SentiaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}:");
    let _ = writeln!(out, "{}", "═".repeat(title.chars().count() + 1));
}

fn subheading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}:");
    let _ = writeln!(out, "{}", "─".repeat(title.chars().count() + 1));
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_analysis_human() {
        let report = AnalysisReport {
            text: "Que dia!".to_string(),
            normalized: "que dia".to_string(),
            words: vec!["dia".to_string()],
            stems: Vec::new(),
        };

        let rendered = report.render_human();
        assert!(rendered.starts_with("Analysis:\n═════════\n"));
        assert!(rendered.contains("Normalized: que dia"));
        assert!(rendered.contains("Stems:      (none)"));
    }

    #[test]
    fn test_classification_json_is_flat() {
        let report = ClassificationReport {
            classifications: vec![TextClassification {
                text: "amei".to_string(),
                result: ClassificationResult::new(
                    "positivo",
                    BTreeMap::from([
                        ("negativo".to_string(), 0.2),
                        ("positivo".to_string(), 0.8),
                    ]),
                ),
            }],
        };

        let value = serde_json::to_value(&report).unwrap();
        let entry = &value["classifications"][0];
        assert_eq!(entry["text"], "amei");
        assert_eq!(entry["classe"], "positivo");
        assert_eq!(entry["positivo"], 0.8);

        let rendered = report.render_human();
        assert!(rendered.contains("=> positivo (0.8000)"));
    }

    #[test]
    fn test_evaluation_human() {
        let report = EvaluationReport {
            train_samples: 8,
            test_samples: 2,
            vocabulary_size: 12,
            accuracy: 0.5,
            most_informative_features: vec![InformativeFeature {
                stem: "otim".to_string(),
                present: true,
                ratio: 3.0,
                label: "positivo".to_string(),
                versus: "negativo".to_string(),
            }],
        };

        let rendered = report.render_human();
        assert!(rendered.contains("Accuracy: 50.00%"));
        assert!(rendered.contains("otim = true   positivo : negativo = 3.0 : 1.0"));
    }
}

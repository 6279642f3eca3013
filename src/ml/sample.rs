//! Labeled samples and dataset loading.
//!
//! A [`LabeledSample`] is the raw `(text, label)` unit of the corpus.
//! Every later stage carries its payload in a [`Labeled`] wrapper so the label
//! travels with the data and can never be separated from it or reordered.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SentiaError};

/// Raw `(text, label)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSample {
    /// Tweet text.
    pub text: String,
    /// Opaque category, e.g. `"positivo"`.
    pub label: String,
}

impl LabeledSample {
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Build a sample from content that is not text, using its string form.
    pub fn from_display<T: Display + ?Sized, L: Into<String>>(content: &T, label: L) -> Self {
        Self::new(content.to_string(), label)
    }

    /// Build a sample from arbitrary JSON values.
    ///
    /// Strings are taken as-is; `null` becomes the empty string and every
    /// other value its compact JSON rendering.
    pub fn from_json_values(text: &Value, label: &Value) -> Self {
        Self::new(coerce_to_string(text), coerce_to_string(label))
    }
}

/// A payload paired with the label of the sample it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labeled<T> {
    pub value: T,
    pub label: String,
}

impl<T> Labeled<T> {
    pub fn new<L: Into<String>>(value: T, label: L) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Transform the payload, keeping the label.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Labeled<U> {
        Labeled {
            value: f(self.value),
            label: self.label,
        }
    }

    /// Transform the payload with a fallible function, keeping the label.
    pub fn try_map<U, F: FnOnce(T) -> Result<U>>(self, f: F) -> Result<Labeled<U>> {
        Ok(Labeled {
            value: f(self.value)?,
            label: self.label,
        })
    }
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse a dataset from a JSON array or JSON lines.
///
/// Each record is an object with `text` and `label` fields. Either field may
/// hold a non-string value; it is coerced to its string form. Blank lines in
/// JSON lines input are skipped.
pub fn parse_samples(content: &str) -> Result<Vec<LabeledSample>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let records: Vec<Value> = serde_json::from_str(trimmed)?;
        records
            .iter()
            .enumerate()
            .map(|(index, record)| sample_from_record(record, index + 1))
            .collect()
    } else {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                let record: Value = serde_json::from_str(line).map_err(|e| {
                    SentiaError::dataset(format!("line {}: {e}", index + 1))
                })?;
                sample_from_record(&record, index + 1)
            })
            .collect()
    }
}

/// Load a dataset file (JSON array or JSON lines).
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledSample>> {
    let content = fs::read_to_string(path.as_ref())?;
    let samples = parse_samples(&content)?;
    log::debug!(
        "loaded {} samples from {}",
        samples.len(),
        path.as_ref().display()
    );
    Ok(samples)
}

fn sample_from_record(record: &Value, record_number: usize) -> Result<LabeledSample> {
    let object = record.as_object().ok_or_else(|| {
        SentiaError::dataset(format!("record {record_number} is not a JSON object"))
    })?;
    let label = object
        .get("label")
        .ok_or_else(|| SentiaError::dataset(format!("record {record_number} has no label")))?;
    let text = object.get("text").unwrap_or(&Value::Null);
    Ok(LabeledSample::from_json_values(text, label))
}

//! Classification output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The chosen label of one classification plus the posterior of every label.
///
/// Serializes as a flat JSON object: the chosen label under `"classe"` and one
/// key per label holding its probability.
///
/// ```
/// use std::collections::BTreeMap;
/// use sentia::ml::classification::ClassificationResult;
///
/// let probabilities = BTreeMap::from([
///     ("negativo".to_string(), 0.25),
///     ("positivo".to_string(), 0.75),
/// ]);
/// let result = ClassificationResult::new("positivo", probabilities);
///
/// let json = serde_json::to_string(&result).unwrap();
/// assert_eq!(json, r#"{"classe":"positivo","negativo":0.25,"positivo":0.75}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "classe")]
    pub label: String,
    #[serde(flatten)]
    pub probabilities: BTreeMap<String, f64>,
}

impl ClassificationResult {
    pub fn new<S: Into<String>>(label: S, probabilities: BTreeMap<String, f64>) -> Self {
        Self {
            label: label.into(),
            probabilities,
        }
    }

    /// Posterior of a label; zero for labels the model does not know.
    pub fn probability(&self, label: &str) -> f64 {
        self.probabilities.get(label).copied().unwrap_or(0.0)
    }

    /// Posterior of the chosen label.
    pub fn confidence(&self) -> f64 {
        self.probability(&self.label)
    }

    /// Labels by descending posterior.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .probabilities
            .iter()
            .map(|(label, p)| (label.as_str(), *p))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.4})", self.label, self.confidence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ClassificationResult {
        ClassificationResult::new(
            "neutro",
            BTreeMap::from([
                ("negativo".to_string(), 0.1),
                ("neutro".to_string(), 0.6),
                ("positivo".to_string(), 0.3),
            ]),
        )
    }

    #[test]
    fn test_accessors() {
        let result = result();

        assert_eq!(result.confidence(), 0.6);
        assert_eq!(result.probability("desconhecido"), 0.0);
        assert_eq!(
            result.ranked(),
            vec![("neutro", 0.6), ("positivo", 0.3), ("negativo", 0.1)]
        );
        assert_eq!(result.to_string(), "neutro (0.6000)");
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(result()).unwrap();

        assert_eq!(value["classe"], "neutro");
        assert_eq!(value["positivo"], 0.3);
        assert_eq!(value.as_object().unwrap().len(), 4);

        let parsed: ClassificationResult = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, result());
    }
}

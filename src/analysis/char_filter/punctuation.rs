//! Punctuation removal.

use super::CharFilter;

/// Drops every ASCII punctuation character.
///
/// The set is the 32 characters `` !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~ ``.
/// Non-ASCII symbols such as `…` or `“` are kept.
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    pub fn new() -> Self {
        PunctuationCharFilter
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_punctuation() {
        let filter = PunctuationCharFilter::new();
        assert_eq!(filter.filter("olá, mundo! (teste) #tag"), "olá mundo teste tag");
    }

    #[test]
    fn test_keeps_non_ascii_symbols() {
        let filter = PunctuationCharFilter::new();
        assert_eq!(filter.filter("ótimo…"), "ótimo…");
    }
}

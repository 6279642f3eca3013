use regex::{NoExpand, Regex};

use super::CharFilter;
use crate::error::{Result, SentiaError};

/// A char filter that replaces every match of a regex pattern.
///
/// With an empty replacement it becomes a removal pass, which is how the
/// tweet normalizer strips links, mentions and retweet markers.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| SentiaError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes every match.
    pub fn removal(pattern: &str) -> Result<Self> {
        Self::new(pattern, "")
    }

    /// The compiled pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        // NoExpand keeps `$` in the replacement literal.
        self.pattern
            .replace_all(input, NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

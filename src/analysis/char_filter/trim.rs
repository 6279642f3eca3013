use super::CharFilter;

/// Strips leading and trailing whitespace.
#[derive(Clone, Debug, Default)]
pub struct TrimCharFilter;

impl TrimCharFilter {
    pub fn new() -> Self {
        TrimCharFilter
    }
}

impl CharFilter for TrimCharFilter {
    fn filter(&self, input: &str) -> String {
        input.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "trim"
    }
}

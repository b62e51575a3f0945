use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TextcatError};

/// A char filter that replaces every match of a regex pattern.
///
/// The replacement follows regex replacement syntax, so `$1` or `${name}`
/// expand to the corresponding capture group of each match.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            TextcatError::configuration(format!("invalid pattern {pattern:?}: {e}"))
        })?;
        Ok(Self::from_regex(pattern, replacement))
    }

    /// Create a filter from an already compiled regex.
    pub fn from_regex(pattern: Regex, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
        }
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

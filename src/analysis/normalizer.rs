//! Text normalizer that produces canonical word strings.
//!
//! The normalizer applies processing in this order:
//! 1. Uppercasing of the entire input
//! 2. Normalization rules, each applied to the full output of the previous one
//! 3. Collapsing of whitespace runs into a single space, then trimming
//!
//! The output is a space separated string of words, and [`TextNormalizer::tokenize`]
//! splits it back on single spaces.
//!
//! # Examples
//!
//! ```
//! use textcat::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::default();
//! assert_eq!(normalizer.normalize("Price: 3,14 dollars"), "PRICE 3.14 DOLLARS");
//! assert_eq!(normalizer.normalize("call (555) 123-4567;"), "CALL 555 123 4567");
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::uppercase::UppercaseCharFilter;
use crate::analysis::rule::NormalizationRule;
use crate::error::Result;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Separator between words in normalized text.
pub const WORD_SEPARATOR: char = ' ';

/// Applies uppercasing, an ordered rule list and whitespace collapsing to raw text.
///
/// Pure and stateless after construction; a single normalizer can be shared
/// between threads.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.char_filters.iter().map(|cf| cf.name()).collect();
        f.debug_struct("TextNormalizer")
            .field("char_filters", &names)
            .finish()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&NormalizationRule::default_rules()).expect("default rules compile")
    }
}

impl TextNormalizer {
    /// Create a normalizer from an ordered rule list.
    pub fn new(rules: &[NormalizationRule]) -> Result<Self> {
        let mut char_filters: Vec<Arc<dyn CharFilter>> = Vec::with_capacity(rules.len() + 1);
        char_filters.push(Arc::new(UppercaseCharFilter::new()));

        for rule in rules {
            let char_filter = rule.to_char_filter()?;
            debug!(
                "compiled {} rule {:?} -> {:?}",
                char_filter.name(),
                rule.pattern(),
                rule.replacement()
            );
            char_filters.push(char_filter);
        }

        Ok(TextNormalizer { char_filters })
    }

    /// Get the char filters in application order, uppercasing first.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Normalize raw text into a canonical, whitespace collapsed, uppercase string.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        for char_filter in &self.char_filters {
            text = char_filter.filter(&text);
        }

        WHITESPACE_RUN
            .replace_all(&text, " ")
            .trim()
            .to_string()
    }

    /// Split normalized text into words.
    ///
    /// Empty text yields no words.
    pub fn tokenize(normalized: &str) -> Vec<&str> {
        if normalized.is_empty() {
            Vec::new()
        } else {
            normalized.split(WORD_SEPARATOR).collect()
        }
    }

    /// Normalize raw text and return its words.
    pub fn analyze(&self, raw: &str) -> Vec<String> {
        let normalized = self.normalize(raw);
        Self::tokenize(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_comma_kept_as_number() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.normalize("price 3,14 dollars"),
            "PRICE 3.14 DOLLARS"
        );
    }

    #[test]
    fn test_punctuation_stripped() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.normalize("CALL (555) 123-4567;"),
            "CALL 555 123 4567"
        );
    }

    #[test]
    fn test_rules_compose_sequentially() {
        // second rule sees the dot produced by the first one
        let rules = vec![
            NormalizationRule::with_group(r"\d(,)\d", ".", 1).unwrap(),
            NormalizationRule::new(r"\.", " POINT ").unwrap(),
        ];
        let normalizer = TextNormalizer::new(&rules).unwrap();
        assert_eq!(normalizer.normalize("1,5"), "1 POINT 5");
    }

    #[test]
    fn test_whitespace_collapse() {
        let normalizer = TextNormalizer::new(&[]).unwrap();
        assert_eq!(normalizer.normalize("  a \t b\n\nc  "), "A B C");
        assert_eq!(normalizer.normalize("   "), "");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_no_double_spaces_or_edges() {
        let normalizer = TextNormalizer::default();
        let samples = [
            " - hello -- world - ",
            "[x] (y) {z}",
            "tab\tseparated\tvalues,,,",
            "&&& $$$ ###",
            "a;b;c;d",
        ];
        for sample in samples {
            let normalized = normalizer.normalize(sample);
            assert!(!normalized.contains("  "), "{normalized:?}");
            assert_eq!(normalized, normalized.trim(), "{normalized:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::default();
        let samples = [
            "Price: 3,14 dollars!",
            "CALL (555) 123-4567;",
            "  mixed Case,  with\ttabs / slashes ",
            "1,2,3,4",
            "",
        ];
        for sample in samples {
            let once = normalizer.normalize(sample);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(TextNormalizer::tokenize("A A B"), vec!["A", "A", "B"]);
        assert!(TextNormalizer::tokenize("").is_empty());
    }

    #[test]
    fn test_analyze_empty_after_rules() {
        let normalizer = TextNormalizer::default();
        assert!(normalizer.analyze("(); --- ###").is_empty());
        assert_eq!(normalizer.analyze("one, two"), vec!["ONE", "TWO"]);
    }

    #[test]
    fn test_debug_lists_filters() {
        let normalizer = TextNormalizer::default();
        let debug = format!("{normalizer:?}");
        assert!(debug.contains("uppercase"));
        assert!(debug.contains("group_replace"));
        assert!(debug.contains("pattern_replace"));
    }
}

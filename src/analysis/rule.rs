//! Declarative normalization rules.
//!
//! A [`NormalizationRule`] describes one substitution step: a regex, a
//! replacement and an optional capture group. Rules are validated when they
//! are built, so an invalid pattern or an out-of-range group surfaces as a
//! [`TextcatError::Configuration`] before any text is processed.
//!
//! Rules serialize as plain JSON objects:
//!
//! ```json
//! { "pattern": "\\d(,)\\d", "replacement": ".", "capture_group": 1 }
//! ```

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::group_replace::GroupReplaceCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::error::{Result, TextcatError};

/// Pattern of the default decimal comma rule. Group 1 is the comma.
pub const DECIMAL_COMMA_PATTERN: &str = r"\d(,)\d";

/// Pattern of the default punctuation stripping rule.
pub const PUNCTUATION_PATTERN: &str = r#"[\[\]():;,/"\-*%#&$]"#;

/// A single, validated substitution step.
///
/// With `capture_group == 0` every whole match is replaced. With a
/// positive group only that group's text is rewritten inside each match.
/// Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RuleDefinition", into = "RuleDefinition")]
pub struct NormalizationRule {
    pattern: Regex,
    replacement: String,
    capture_group: usize,
}

/// Serialized form of a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RuleDefinition {
    pattern: String,
    replacement: String,
    #[serde(default)]
    capture_group: usize,
}

impl NormalizationRule {
    /// Create a rule that replaces whole matches.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Self::with_group(pattern, replacement, 0)
    }

    /// Create a rule that rewrites `capture_group` inside each match.
    ///
    /// A group of 0 means the whole match.
    pub fn with_group(pattern: &str, replacement: &str, capture_group: usize) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            TextcatError::configuration(format!("invalid pattern {pattern:?}: {e}"))
        })?;

        if capture_group >= regex.captures_len() {
            return Err(TextcatError::configuration(format!(
                "capture group {capture_group} is out of range for pattern {pattern:?} ({} explicit groups)",
                regex.captures_len() - 1
            )));
        }

        Ok(Self {
            pattern: regex,
            replacement: replacement.to_string(),
            capture_group,
        })
    }

    /// The two rules every pipeline uses unless configured otherwise:
    /// decimal commas become dots, then punctuation becomes spaces.
    pub fn default_rules() -> Vec<NormalizationRule> {
        vec![
            Self::with_group(DECIMAL_COMMA_PATTERN, ".", 1)
                .expect("default decimal comma rule is valid"),
            Self::new(PUNCTUATION_PATTERN, " ").expect("default punctuation rule is valid"),
        ]
    }

    /// Get the source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Get the replacement text.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Get the capture group (0 for whole match).
    pub fn capture_group(&self) -> usize {
        self.capture_group
    }

    /// Compile this rule into the char filter that applies it.
    pub fn to_char_filter(&self) -> Result<Arc<dyn CharFilter>> {
        if self.capture_group == 0 {
            Ok(Arc::new(PatternReplaceCharFilter::from_regex(
                self.pattern.clone(),
                &self.replacement,
            )))
        } else {
            Ok(Arc::new(GroupReplaceCharFilter::from_regex(
                self.pattern.clone(),
                &self.replacement,
                self.capture_group,
            )?))
        }
    }
}

impl PartialEq for NormalizationRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str()
            && self.replacement == other.replacement
            && self.capture_group == other.capture_group
    }
}

impl TryFrom<RuleDefinition> for NormalizationRule {
    type Error = TextcatError;

    fn try_from(definition: RuleDefinition) -> Result<Self> {
        Self::with_group(
            &definition.pattern,
            &definition.replacement,
            definition.capture_group,
        )
    }
}

impl From<NormalizationRule> for RuleDefinition {
    fn from(rule: NormalizationRule) -> Self {
        RuleDefinition {
            pattern: rule.pattern.as_str().to_string(),
            replacement: rule.replacement,
            capture_group: rule.capture_group,
        }
    }
}

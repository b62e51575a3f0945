//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the whole text string before it is split into words.
//! Each filter sees the complete output of the previous one, so a chain of
//! filters composes sequentially.
//!
//! # Available Filters
//!
//! - [`uppercase::UppercaseCharFilter`] - Unicode uppercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex replacement of whole matches
//! - [`group_replace::GroupReplaceCharFilter`] - Regex replacement scoped to one capture group
//!
//! # Examples
//!
//! ```
//! use textcat::analysis::char_filter::CharFilter;
//! use textcat::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"[;:]", " ").unwrap();
//! assert_eq!(filter.filter("A;B:C"), "A B C");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod group_replace;
pub mod pattern_replace;
pub mod uppercase;

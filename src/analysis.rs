//! Text analysis module for textcat.
//!
//! This module turns raw text into the canonical token string every other
//! stage works on. Processing happens in three steps:
//!
//! ```text
//! Raw Text → Uppercase → Rule 1 → Rule 2 → ... → Rule N → Whitespace collapse
//! ```
//!
//! Rules are declared as [`NormalizationRule`] values and compiled into
//! [`CharFilter`] implementations by the [`TextNormalizer`].

pub mod char_filter;
pub mod normalizer;
pub mod rule;

// Re-export commonly used types
pub use char_filter::CharFilter;
pub use normalizer::TextNormalizer;
pub use rule::NormalizationRule;

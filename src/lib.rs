//! # textcat
//!
//! A text vectorization pipeline for category classifiers.
//!
//! ## Features
//!
//! - Deterministic text normalization with ordered, group-aware regex rules
//! - Vocabulary fitting with stable first-seen indexing
//! - Bag-of-words and TF-IDF feature encoding
//! - Training set export for external models
//! - Confidence-thresholded decoding of model output
//!
//! ## Pipeline
//!
//! ```text
//! corpus → TextNormalizer → Vocabulary (fit once) → Vectorizer → training set
//! query  → TextNormalizer → Vectorizer::encode_one → Classifier → CategoryDecoder → label
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod decoder;
pub mod error;
pub mod pipeline;
pub mod vectorizer;
pub mod vocabulary;

pub mod prelude {
    pub use crate::analysis::{NormalizationRule, TextNormalizer};
    pub use crate::classifier::Classifier;
    pub use crate::corpus::LabeledCorpus;
    pub use crate::decoder::CategoryDecoder;
    pub use crate::error::{Result, TextcatError};
    pub use crate::pipeline::TextPipeline;
    pub use crate::vectorizer::{VectorMethod, Vectorizer};
    pub use crate::vocabulary::Vocabulary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! High level pipeline: fit once, then encode queries and decode verdicts.
//!
//! [`TextPipeline`] bundles a [`Vectorizer`] with the [`Vocabulary`] it was
//! fitted on. Fitting happens exactly once, in the constructor; afterwards the
//! pipeline is read-only and can be shared between threads.
//!
//! # Examples
//!
//! ```
//! use textcat::analysis::NormalizationRule;
//! use textcat::corpus::LabeledCorpus;
//! use textcat::pipeline::TextPipeline;
//! use textcat::vectorizer::VectorMethod;
//!
//! # fn main() -> textcat::error::Result<()> {
//! let corpus: LabeledCorpus = vec![
//!     ("greeting", "hello there"),
//!     ("weather", "will it rain"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let pipeline = TextPipeline::fit(
//!     &corpus,
//!     NormalizationRule::default_rules(),
//!     VectorMethod::Bow,
//! )?;
//! assert_eq!(pipeline.vocabulary_size(), 5);
//! assert_eq!(pipeline.category_size(), 2);
//! assert_eq!(pipeline.encode_one("Hello!"), vec![0.0; 5]);
//! assert_eq!(pipeline.encode_one("hello"), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
//! assert_eq!(pipeline.decode(&[0.05, 0.95]), "weather");
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use log::{debug, info};

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::rule::NormalizationRule;
use crate::classifier::Classifier;
use crate::config::PipelineConfig;
use crate::corpus::LabeledCorpus;
use crate::decoder::CategoryDecoder;
use crate::error::{Result, TextcatError};
use crate::vectorizer::{FeatureVector, TrainingSet, VectorMethod, Vectorizer};
use crate::vocabulary::Vocabulary;

/// A fitted vectorization pipeline.
#[derive(Debug, Clone)]
pub struct TextPipeline {
    vectorizer: Vectorizer,
    vocabulary: Vocabulary,
}

impl TextPipeline {
    /// Fit a pipeline on an in-memory corpus.
    pub fn fit(
        corpus: &LabeledCorpus,
        rules: Vec<NormalizationRule>,
        method: VectorMethod,
    ) -> Result<Self> {
        let vectorizer = Vectorizer::new(TextNormalizer::new(&rules)?, method);
        let vocabulary = vectorizer.fit(corpus);
        Ok(TextPipeline {
            vectorizer,
            vocabulary,
        })
    }

    /// Load the configured corpus and fit on it.
    ///
    /// Returns the pipeline together with the corpus it was fitted on. The
    /// configured vocabulary path is not written here, see
    /// [`TextPipeline::export_vocabulary`].
    pub fn from_config(config: &PipelineConfig) -> Result<(Self, LabeledCorpus)> {
        let corpus_path = config
            .corpus_path
            .as_ref()
            .ok_or_else(|| TextcatError::configuration("no corpus path configured"))?;

        let corpus = LabeledCorpus::from_path(corpus_path)?;
        let pipeline = Self::fit(&corpus, config.rules.clone(), config.method)?;
        info!(
            "fitted {} pipeline: {} categories, {} words, {} texts",
            config.method,
            pipeline.category_size(),
            pipeline.vocabulary_size(),
            pipeline.vocabulary.total_text_count()
        );

        Ok((pipeline, corpus))
    }

    /// Write the fitted vocabulary to `path`, one word per line.
    ///
    /// A failure leaves the pipeline untouched and usable.
    pub fn export_vocabulary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.vocabulary.export(path)
    }

    /// Width of feature vectors.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.vocabulary_size()
    }

    /// Width of target vectors and classifier distributions.
    pub fn category_size(&self) -> usize {
        self.vocabulary.category_size()
    }

    /// Get the fitted vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the vectorizer.
    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    /// Normalize raw text the same way training texts were normalized.
    pub fn normalize(&self, text: &str) -> String {
        self.vectorizer.normalizer().normalize(text)
    }

    /// Encode a raw query into the fitted feature space.
    pub fn encode_one(&self, text: &str) -> FeatureVector {
        self.vectorizer.encode_one(text, &self.vocabulary)
    }

    /// Encode a corpus into a training set for an external trainer.
    pub fn training_set(&self, corpus: &LabeledCorpus) -> Result<TrainingSet> {
        self.vectorizer.encode_corpus(corpus, &self.vocabulary)
    }

    /// Decode a classifier distribution into a category or `"Unknown"`.
    pub fn decode(&self, distribution: &[f64]) -> &str {
        CategoryDecoder::decode(distribution, self.vocabulary.categories())
    }

    /// Encode a raw query, run it through a classifier and decode the verdict.
    pub fn classify(&self, text: &str, classifier: &dyn Classifier) -> Result<String> {
        let features = self.encode_one(text);
        let distribution = classifier.predict(&features)?;
        if distribution.len() != self.category_size() {
            return Err(TextcatError::invalid_argument(format!(
                "classifier {} returned {} probabilities for {} categories",
                classifier.name(),
                distribution.len(),
                self.category_size()
            )));
        }

        let label = self.decode(&distribution);
        debug!("classified {text:?} as {label} ({})", classifier.name());
        Ok(label.to_string())
    }
}

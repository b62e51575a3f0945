//! Configuration for the vectorization pipeline.
//!
//! Configuration files are JSON; every field is optional:
//!
//! ```json
//! {
//!   "method": "TF_IDF",
//!   "rules": [
//!     { "pattern": "\\d(,)\\d", "replacement": ".", "capture_group": 1 },
//!     { "pattern": "[;:]", "replacement": " " }
//!   ],
//!   "corpus_path": "corpus.tsv",
//!   "vocabulary_path": "vocabulary.txt"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::rule::NormalizationRule;
use crate::error::{Result, TextcatError};
use crate::vectorizer::VectorMethod;

/// Configuration for a [`TextPipeline`](crate::pipeline::TextPipeline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Feature encoding method.
    pub method: VectorMethod,

    /// Normalization rules, applied in order after uppercasing.
    pub rules: Vec<NormalizationRule>,

    /// Tab-delimited training corpus.
    pub corpus_path: Option<PathBuf>,

    /// Where to export the vocabulary after fitting, if anywhere.
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            method: VectorMethod::Bow,
            rules: NormalizationRule::default_rules(),
            corpus_path: None,
            vocabulary_path: None,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextcatError::configuration(format!("can't read config {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&content)?;
        info!("loaded config {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TextcatError::configuration(format!("invalid config: {e}")))
    }

    /// Set the encoding method.
    pub fn with_method(mut self, method: VectorMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the corpus path.
    pub fn with_corpus_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.corpus_path = Some(path.into());
        self
    }

    /// Set the vocabulary export path.
    pub fn with_vocabulary_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.vocabulary_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.method, VectorMethod::Bow);
        assert_eq!(config.rules, NormalizationRule::default_rules());
        assert!(config.corpus_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PipelineConfig::from_json(r#"{"method": "TF_IDF"}"#).unwrap();
        assert_eq!(config.method, VectorMethod::TfIdf);
        assert_eq!(config.rules.len(), 2);
    }

    #[test]
    fn test_custom_rules() {
        let config = PipelineConfig::from_json(
            r#"{"rules": [{"pattern": "[!?]", "replacement": " "}], "corpus_path": "c.tsv"}"#,
        )
        .unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].pattern(), "[!?]");
        assert_eq!(config.corpus_path, Some(PathBuf::from("c.tsv")));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            PipelineConfig::from_json(r#"{"method": "GLOVE"}"#),
            Err(TextcatError::Configuration(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json(
                r#"{"rules": [{"pattern": "a(b)", "replacement": "", "capture_group": 2}]}"#
            ),
            Err(TextcatError::Configuration(_))
        ));
        assert!(matches!(
            PipelineConfig::from_file("/nonexistent/textcat.json"),
            Err(TextcatError::Configuration(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("textcat.json");
        let config = PipelineConfig::default()
            .with_method(VectorMethod::TfIdf)
            .with_corpus_path("corpus.tsv");
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(PipelineConfig::from_file(&path).unwrap(), config);
    }
}

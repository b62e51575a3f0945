//! Feature encoding against a fitted vocabulary.
//!
//! Two encoding methods are available:
//!
//! - [`VectorMethod::Bow`] - raw word occurrence counts
//! - [`VectorMethod::TfIdf`] - `(c / n) * ln(total_text_count / occurrences)` per word,
//!   where `c` is the in-text count and `n` the text's token count
//!
//! Training rows and single query vectors go through the same per-row code,
//! so a query lands in exactly the coordinate space the classifier was
//! trained on. Words missing from the vocabulary contribute nothing.
//!
//! # Examples
//!
//! ```
//! use textcat::analysis::TextNormalizer;
//! use textcat::corpus::LabeledCorpus;
//! use textcat::vectorizer::{VectorMethod, Vectorizer};
//!
//! let corpus: LabeledCorpus = vec![("x", "a b"), ("y", "b c")].into_iter().collect();
//! let vectorizer = Vectorizer::new(TextNormalizer::default(), VectorMethod::Bow);
//! let vocabulary = vectorizer.fit(&corpus);
//!
//! assert_eq!(vectorizer.encode_one("b b d", &vocabulary), vec![0.0, 2.0, 0.0]);
//! ```

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;
use crate::corpus::LabeledCorpus;
use crate::error::{Result, TextcatError};
use crate::vocabulary::Vocabulary;

/// Dense feature vector, one column per vocabulary word.
pub type FeatureVector = Vec<f64>;

/// Dense one-hot target vector, one column per category.
pub type TargetVector = Vec<f64>;

/// Feature encoding method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum VectorMethod {
    /// Bag of words: occurrence counts.
    #[default]
    #[serde(rename = "BOW")]
    #[value(name = "bow")]
    Bow,
    /// Term frequency times corpus occurrence based inverse frequency.
    #[serde(rename = "TF_IDF")]
    #[value(name = "tf-idf")]
    TfIdf,
}

impl fmt::Display for VectorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorMethod::Bow => write!(f, "BOW"),
            VectorMethod::TfIdf => write!(f, "TF_IDF"),
        }
    }
}

impl FromStr for VectorMethod {
    type Err = TextcatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "BOW" => Ok(VectorMethod::Bow),
            "TF_IDF" | "TFIDF" => Ok(VectorMethod::TfIdf),
            _ => Err(TextcatError::configuration(format!(
                "unknown vector method {s:?}, expected BOW or TF_IDF"
            ))),
        }
    }
}

/// Feature and target matrices for an external trainer.
///
/// Rows follow the corpus category-then-record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    /// Category labels naming the target columns.
    pub categories: Vec<String>,
    /// One feature row per record.
    pub features: Vec<FeatureVector>,
    /// One one-hot target row per record.
    pub targets: Vec<TargetVector>,
}

impl TrainingSet {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Write the training set as JSON.
    pub fn export<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            TextcatError::serialization(format!(
                "can't save training set to {}: {e}",
                path.display()
            ))
        })?;

        let writer = BufWriter::new(file);
        let written = if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        };
        written.map_err(|e| {
            TextcatError::serialization(format!(
                "can't save training set to {}: {e}",
                path.display()
            ))
        })?;

        info!("saved {} training rows to {}", self.len(), path.display());
        Ok(())
    }
}

/// Encodes normalized text into feature vectors.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    normalizer: TextNormalizer,
    method: VectorMethod,
}

impl Vectorizer {
    /// Create a vectorizer with the given normalizer and encoding method.
    pub fn new(normalizer: TextNormalizer, method: VectorMethod) -> Self {
        Vectorizer { normalizer, method }
    }

    /// Get the encoding method.
    pub fn method(&self) -> VectorMethod {
        self.method
    }

    /// Get the normalizer.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Fit a vocabulary using this vectorizer's normalizer.
    pub fn fit(&self, corpus: &LabeledCorpus) -> Vocabulary {
        Vocabulary::fit(corpus, &self.normalizer)
    }

    /// Encode a single raw text.
    pub fn encode_one(&self, text: &str, vocabulary: &Vocabulary) -> FeatureVector {
        let mut row = vec![0.0; vocabulary.vocabulary_size()];
        let normalized = self.normalizer.normalize(text);
        self.fill_row(&TextNormalizer::tokenize(&normalized), vocabulary, &mut row);
        row
    }

    /// Encode every record of a corpus into feature and one-hot target rows.
    ///
    /// Fails if the corpus has a category the vocabulary was not fitted with.
    pub fn encode_corpus(
        &self,
        corpus: &LabeledCorpus,
        vocabulary: &Vocabulary,
    ) -> Result<TrainingSet> {
        let rows = corpus.text_count();
        let mut features = Vec::with_capacity(rows);
        let mut targets = Vec::with_capacity(rows);

        for (category, texts) in corpus.iter() {
            let category_index = vocabulary.category_index(category).ok_or_else(|| {
                TextcatError::invalid_argument(format!(
                    "category {category:?} is not part of the vocabulary"
                ))
            })?;

            for text in texts {
                features.push(self.encode_one(text, vocabulary));

                let mut target = vec![0.0; vocabulary.category_size()];
                target[category_index] = 1.0;
                targets.push(target);
            }
        }

        debug!(
            "encoded training set: {} rows x {} features, {} targets ({})",
            features.len(),
            vocabulary.vocabulary_size(),
            vocabulary.category_size(),
            self.method
        );

        Ok(TrainingSet {
            categories: vocabulary.categories().to_vec(),
            features,
            targets,
        })
    }

    fn fill_row(&self, words: &[&str], vocabulary: &Vocabulary, row: &mut [f64]) {
        match self.method {
            VectorMethod::Bow => Self::fill_bow(words, vocabulary, row),
            VectorMethod::TfIdf => Self::fill_tf_idf(words, vocabulary, row),
        }
    }

    fn fill_bow(words: &[&str], vocabulary: &Vocabulary, row: &mut [f64]) {
        for word in words {
            if let Some(column) = vocabulary.word_index(word) {
                row[column] += 1.0;
            }
        }
    }

    fn fill_tf_idf(words: &[&str], vocabulary: &Vocabulary, row: &mut [f64]) {
        if words.is_empty() {
            return;
        }

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for word in words {
            *counts.entry(*word).or_insert(0) += 1;
        }

        // n counts every token, known or not
        let n = words.len() as f64;
        for (word, count) in counts {
            if let (Some(column), Some(idf)) = (vocabulary.word_index(word), vocabulary.idf(word))
            {
                row[column] = (count as f64 / n) * idf;
            }
        }
    }
}

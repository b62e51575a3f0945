//! Vocabulary fitted once from a labeled corpus.
//!
//! The vocabulary fixes the coordinate space of every feature vector: the
//! category list sizes target vectors, the word index sizes feature vectors.
//! Both orders are first-seen order over the corpus, so the same corpus
//! input always produces the same vocabulary.
//!
//! # Examples
//!
//! ```
//! use textcat::analysis::TextNormalizer;
//! use textcat::corpus::LabeledCorpus;
//! use textcat::vocabulary::Vocabulary;
//!
//! let corpus: LabeledCorpus = vec![("greeting", "hello there"), ("farewell", "bye there")]
//!     .into_iter()
//!     .collect();
//! let vocabulary = Vocabulary::fit(&corpus, &TextNormalizer::default());
//!
//! assert_eq!(vocabulary.categories(), &["greeting", "farewell"]);
//! assert_eq!(vocabulary.word_index("HELLO"), Some(0));
//! assert_eq!(vocabulary.word_index("BYE"), Some(2));
//! assert_eq!(vocabulary.word_count("THERE"), Some(2));
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use log::info;

use crate::analysis::normalizer::TextNormalizer;
use crate::corpus::LabeledCorpus;
use crate::error::{Result, TextcatError};

/// Immutable word and category index built from a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    /// Categories in canonical index order.
    categories: Vec<String>,
    /// Word -> feature column, contiguous from 0 in discovery order.
    word_index: IndexMap<String, usize>,
    /// Word -> total occurrences across the whole corpus.
    word_doc_count: IndexMap<String, usize>,
    /// Number of text records in the corpus.
    total_text_count: usize,
}

impl Vocabulary {
    /// Fit a vocabulary from a corpus, normalizing every text with `normalizer`.
    pub fn fit(corpus: &LabeledCorpus, normalizer: &TextNormalizer) -> Self {
        let mut categories = Vec::with_capacity(corpus.category_count());
        let mut word_index: IndexMap<String, usize> = IndexMap::new();
        let mut word_doc_count: IndexMap<String, usize> = IndexMap::new();
        let mut total_text_count = 0;

        for (category, texts) in corpus.iter() {
            categories.push(category.to_string());

            for text in texts {
                let normalized = normalizer.normalize(text);
                for word in TextNormalizer::tokenize(&normalized) {
                    if !word_index.contains_key(word) {
                        let idx = word_index.len();
                        word_index.insert(word.to_string(), idx);
                    }
                    *word_doc_count.entry(word.to_string()).or_insert(0) += 1;
                }
                total_text_count += 1;
            }
        }

        info!("filled categories: {}", categories.len());
        info!("filled vocabulary: {}", word_index.len());

        Vocabulary {
            categories,
            word_index,
            word_doc_count,
            total_text_count,
        }
    }

    /// Get the categories in canonical order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Get the index of a category.
    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// Get the feature column of a word.
    pub fn word_index(&self, word: &str) -> Option<usize> {
        self.word_index.get(word).copied()
    }

    /// Get the total number of occurrences of a word in the corpus.
    pub fn word_count(&self, word: &str) -> Option<usize> {
        self.word_doc_count.get(word).copied()
    }

    /// Iterate over words in feature column order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.word_index.keys().map(String::as_str)
    }

    /// Number of text records the vocabulary was fitted on.
    pub fn total_text_count(&self) -> usize {
        self.total_text_count
    }

    /// Width of feature vectors.
    pub fn vocabulary_size(&self) -> usize {
        self.word_index.len()
    }

    /// Width of target vectors.
    pub fn category_size(&self) -> usize {
        self.categories.len()
    }

    /// Inverse frequency weight of a word: `ln(total_text_count / occurrences)`.
    ///
    /// Occurrences are counted over the whole corpus, not per document, so a
    /// word repeated inside one text is weighted down further than textbook
    /// idf would do. Returns `None` for unknown words.
    pub fn idf(&self, word: &str) -> Option<f64> {
        self.word_count(word)
            .map(|count| (self.total_text_count as f64 / count as f64).ln())
    }

    /// Write the words, one per line, in feature column order.
    pub fn write_words<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            writer.write_all(word.as_bytes())?;
        }
        writer.flush()
    }

    /// Export the words to a plain text file, one per line.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            TextcatError::serialization(format!(
                "can't save vocabulary to {}: {e}",
                path.display()
            ))
        })?;

        let mut writer = BufWriter::new(file);
        self.write_words(&mut writer).map_err(|e| {
            TextcatError::serialization(format!(
                "can't save vocabulary to {}: {e}",
                path.display()
            ))
        })?;

        info!(
            "saved vocabulary of {} words to {}",
            self.vocabulary_size(),
            path.display()
        );
        Ok(())
    }
}

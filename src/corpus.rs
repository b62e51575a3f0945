//! Labeled corpus and the tab-delimited corpus reader.
//!
//! A corpus file holds one record per line with exactly two fields, the
//! category label and the raw text, separated by a tab and without a
//! header row:
//!
//! ```text
//! greeting	Hello there!
//! greeting	Good morning, how are you?
//! weather	Will it rain tomorrow?
//! ```
//!
//! Fields may be double-quoted. Any malformed record aborts the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use log::info;

use crate::error::{Result, TextcatError};

/// Field delimiter of corpus files.
pub const CORPUS_DELIMITER: u8 = b'\t';

/// Raw texts grouped by category.
///
/// Categories keep first-seen order, which is the canonical category index
/// order. Texts keep source order within their category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledCorpus {
    categories: IndexMap<String, Vec<String>>,
}

impl LabeledCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text to a category, registering the category on first use.
    pub fn add<C: Into<String>, T: Into<String>>(&mut self, category: C, text: T) {
        self.categories
            .entry(category.into())
            .or_default()
            .push(text.into());
    }

    /// Read a corpus from a tab-delimited file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TextcatError::corpus_parse(format!("can't open corpus {}: {e}", path.display()))
        })?;
        let corpus = Self::from_reader(file)?;
        info!(
            "loaded corpus {}: {} records",
            path.display(),
            corpus.text_count()
        );
        Ok(corpus)
    }

    /// Read a corpus from any tab-delimited source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(CORPUS_DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut corpus = LabeledCorpus::new();
        let mut record = StringRecord::new();

        loop {
            let has_record = csv_reader.read_record(&mut record).map_err(|e| {
                TextcatError::corpus_parse(format!("can't parse corpus: {e}"))
            })?;
            if !has_record {
                break;
            }

            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match (record.get(0), record.get(1), record.len()) {
                (Some(category), Some(text), 2) => corpus.add(category, text),
                (_, _, len) => {
                    return Err(TextcatError::corpus_parse(format!(
                        "line {line}: expected 2 fields (category, text), found {len}"
                    )));
                }
            }
        }

        Ok(corpus)
    }

    /// Iterate over categories in canonical order with their texts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(category, texts)| (category.as_str(), texts.as_slice()))
    }

    /// Get the categories in canonical order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Get the texts of one category.
    pub fn texts(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Number of distinct categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of text records across all categories.
    pub fn text_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Check if the corpus has no records.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<C: Into<String>, T: Into<String>> FromIterator<(C, T)> for LabeledCorpus {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        let mut corpus = LabeledCorpus::new();
        for (category, text) in iter {
            corpus.add(category, text);
        }
        corpus
    }
}

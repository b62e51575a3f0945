//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextcatArgs};
use crate::error::Result;

/// Result structure for text normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub text: String,
    pub normalized: String,
    pub words: usize,
}

/// Result structure for vocabulary fitting.
#[derive(Debug, Serialize, Deserialize)]
pub struct FitResult {
    pub method: String,
    pub categories: Vec<String>,
    pub vocabulary_size: usize,
    pub text_count: usize,
    pub vocabulary_file: Option<String>,
}

/// Result structure for text encoding.
#[derive(Debug, Serialize, Deserialize)]
pub struct EncodeResult {
    pub method: String,
    pub normalized: String,
    pub known_words: usize,
    pub vector: Vec<f64>,
}

/// Result structure for training set export.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetResult {
    pub path: String,
    pub rows: usize,
    pub feature_columns: usize,
    pub target_columns: usize,
}

/// Result structure for distribution decoding.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeResult {
    pub label: String,
    pub max_index: usize,
    pub max_value: f64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TextcatArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TextcatArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        let width = obj.keys().map(|k| k.len()).max().unwrap_or(0);
        for (key, field) in obj {
            println!("{:width$}  {}", key, format_human_value(field));
        }
    } else {
        println!("{}", format_human_value(&value));
    }

    Ok(())
}

/// Render a JSON value without quoting plain strings.
fn format_human_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(format_human_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        other => other.to_string(),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextcatArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

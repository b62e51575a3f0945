//! Command implementations for textcat CLI.

use log::{debug, info, warn};

use crate::analysis::normalizer::TextNormalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::corpus::LabeledCorpus;
use crate::decoder::CategoryDecoder;
use crate::error::{Result, TextcatError};
use crate::pipeline::TextPipeline;

/// Execute a CLI command.
pub fn execute_command(args: TextcatArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Normalize(normalize_args) => normalize_text(normalize_args, config, &args),
        Command::Fit(fit_args) => fit_vocabulary(fit_args, config, &args),
        Command::Encode(encode_args) => encode_text(encode_args, config, &args),
        Command::Dataset(dataset_args) => write_dataset(dataset_args, config, &args),
        Command::Decode(decode_args) => decode_distribution(decode_args, config, &args),
    }
}

/// Load the config file if given, otherwise start from defaults.
fn load_config(args: &TextcatArgs) -> Result<PipelineConfig> {
    match &args.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            PipelineConfig::from_file(path)
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Apply command line overrides on top of the loaded config.
fn apply_corpus_args(mut config: PipelineConfig, corpus_args: &CorpusArgs) -> PipelineConfig {
    if let Some(corpus) = &corpus_args.corpus {
        config.corpus_path = Some(corpus.clone());
    }
    if let Some(method) = corpus_args.method {
        config.method = method;
    }
    debug!("effective config: {config:?}");
    config
}

/// Fit on the configured corpus, exporting the vocabulary when a path is configured.
///
/// An export failure is logged and the fitted pipeline is still returned.
fn fit_from_config(config: &PipelineConfig) -> Result<(TextPipeline, LabeledCorpus)> {
    let (pipeline, corpus) = TextPipeline::from_config(config)?;
    if let Some(vocabulary_path) = &config.vocabulary_path {
        if let Err(e) = pipeline.export_vocabulary(vocabulary_path) {
            warn!("{e}");
        }
    }
    Ok((pipeline, corpus))
}

/// Normalize a text.
fn normalize_text(args: &NormalizeArgs, config: PipelineConfig, cli_args: &TextcatArgs) -> Result<()> {
    let normalizer = TextNormalizer::new(&config.rules)?;
    let normalized = normalizer.normalize(&args.text);

    output_result(
        "Normalized text",
        &NormalizeResult {
            text: args.text.clone(),
            words: TextNormalizer::tokenize(&normalized).len(),
            normalized,
        },
        cli_args,
    )
}

/// Fit a vocabulary and report corpus statistics.
fn fit_vocabulary(args: &FitArgs, config: PipelineConfig, cli_args: &TextcatArgs) -> Result<()> {
    let mut config = apply_corpus_args(config, &args.corpus);
    if let Some(vocabulary_out) = &args.vocabulary_out {
        config.vocabulary_path = Some(vocabulary_out.clone());
    }

    let (pipeline, _) = TextPipeline::from_config(&config)?;
    if let Some(vocabulary_path) = &config.vocabulary_path {
        pipeline.export_vocabulary(vocabulary_path)?;
    }
    let vocabulary = pipeline.vocabulary();

    output_result(
        "Vocabulary fitted successfully",
        &FitResult {
            method: config.method.to_string(),
            categories: vocabulary.categories().to_vec(),
            vocabulary_size: vocabulary.vocabulary_size(),
            text_count: vocabulary.total_text_count(),
            vocabulary_file: config
                .vocabulary_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        cli_args,
    )
}

/// Encode a text against the vocabulary of the configured corpus.
fn encode_text(args: &EncodeArgs, config: PipelineConfig, cli_args: &TextcatArgs) -> Result<()> {
    let config = apply_corpus_args(config, &args.corpus);
    let (pipeline, _) = fit_from_config(&config)?;

    let normalized = pipeline.normalize(&args.text);
    let known_words = TextNormalizer::tokenize(&normalized)
        .into_iter()
        .filter(|word| pipeline.vocabulary().word_index(word).is_some())
        .count();

    output_result(
        "Encoded text",
        &EncodeResult {
            method: config.method.to_string(),
            normalized,
            known_words,
            vector: pipeline.encode_one(&args.text),
        },
        cli_args,
    )
}

/// Encode the configured corpus and write it as a training set.
fn write_dataset(args: &DatasetArgs, config: PipelineConfig, cli_args: &TextcatArgs) -> Result<()> {
    let config = apply_corpus_args(config, &args.corpus);
    let (pipeline, corpus) = fit_from_config(&config)?;

    let training_set = pipeline.training_set(&corpus)?;
    training_set.export(&args.output, cli_args.pretty)?;

    output_result(
        "Training set written successfully",
        &DatasetResult {
            path: args.output.to_string_lossy().to_string(),
            rows: training_set.len(),
            feature_columns: pipeline.vocabulary_size(),
            target_columns: pipeline.category_size(),
        },
        cli_args,
    )
}

/// Decode a comma separated distribution into a category label.
fn decode_distribution(
    args: &DecodeArgs,
    config: PipelineConfig,
    cli_args: &TextcatArgs,
) -> Result<()> {
    let distribution = parse_distribution(&args.distribution)?;
    let config = apply_corpus_args(config, &args.corpus);
    let (pipeline, _) = fit_from_config(&config)?;

    if distribution.len() != pipeline.category_size() {
        return Err(TextcatError::invalid_argument(format!(
            "distribution has {} values but the corpus has {} categories",
            distribution.len(),
            pipeline.category_size()
        )));
    }

    let (max_index, max_value) = CategoryDecoder::arg_max(&distribution);
    output_result(
        "Decoded distribution",
        &DecodeResult {
            label: pipeline.decode(&distribution).to_string(),
            max_index,
            max_value,
        },
        cli_args,
    )
}

/// Parse "0.1,0.9" style probability lists.
fn parse_distribution(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value.parse::<f64>().map_err(|e| {
                TextcatError::invalid_argument(format!("invalid probability {value:?}: {e}"))
            })
        })
        .collect()
}

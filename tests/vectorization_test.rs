//! Integration tests for normalization, fitting, encoding and decoding.

use std::io::Write;

use textcat::analysis::NormalizationRule;
use textcat::analysis::TextNormalizer;
use textcat::analysis::rule::{DECIMAL_COMMA_PATTERN, PUNCTUATION_PATTERN};
use textcat::corpus::LabeledCorpus;
use textcat::decoder::CategoryDecoder;
use textcat::error::{Result, TextcatError};
use textcat::pipeline::TextPipeline;
use textcat::vectorizer::{VectorMethod, Vectorizer};
use textcat::vocabulary::Vocabulary;

const CORPUS: &str = "\
weather\tWill it rain tomorrow?
weather\tIs it sunny; or cloudy, today?
greeting\tHello there!
greeting\tGood morning, how are you?
price\tThe price is 3,14 dollars
price\tIt costs 12,50 (dollars) per item
weather\tRain, rain and more rain
";

fn corpus() -> Result<LabeledCorpus> {
    LabeledCorpus::from_reader(CORPUS.as_bytes())
}

#[test]
fn test_group_scoped_rule_example() -> Result<()> {
    let normalizer = TextNormalizer::new(&[NormalizationRule::with_group(
        DECIMAL_COMMA_PATTERN,
        ".",
        1,
    )?])?;

    assert_eq!(
        normalizer.normalize("PRICE 3,14 DOLLARS"),
        "PRICE 3.14 DOLLARS"
    );

    Ok(())
}

#[test]
fn test_punctuation_rule_example() -> Result<()> {
    let normalizer = TextNormalizer::new(&[NormalizationRule::new(PUNCTUATION_PATTERN, " ")?])?;

    assert_eq!(normalizer.normalize("CALL (555) 123-4567;"), "CALL 555 123 4567");

    Ok(())
}

#[test]
fn test_bow_example() -> Result<()> {
    // vocabulary {A: 0, B: 1}
    let corpus: LabeledCorpus = vec![("c", "a b")].into_iter().collect();
    let pipeline = TextPipeline::fit(&corpus, NormalizationRule::default_rules(), VectorMethod::Bow)?;

    assert_eq!(pipeline.vocabulary().word_index("A"), Some(0));
    assert_eq!(pipeline.vocabulary().word_index("B"), Some(1));
    assert_eq!(pipeline.encode_one("A A B"), vec![2.0, 1.0]);

    Ok(())
}

#[test]
fn test_tf_idf_example() -> Result<()> {
    // 10 texts, A occurs 5 times in total
    let mut corpus = LabeledCorpus::new();
    for _ in 0..5 {
        corpus.add("with", "a");
    }
    for _ in 0..5 {
        corpus.add("without", "b");
    }
    let vectorizer = Vectorizer::new(TextNormalizer::default(), VectorMethod::TfIdf);
    let vocabulary = vectorizer.fit(&corpus);

    assert_eq!(vocabulary.total_text_count(), 10);
    assert_eq!(vocabulary.word_count("A"), Some(5));

    let row = vectorizer.encode_one("A A", &vocabulary);
    assert!((row[0] - 2.0f64.ln()).abs() < 1e-12);
    assert!((row[0] - 0.693).abs() < 1e-3);
    assert_eq!(row[1], 0.0);

    Ok(())
}

#[test]
fn test_tf_idf_uses_occurrence_counts() -> Result<()> {
    // X appears in 1 of 2 texts but 3 times, so its weight uses 3, not 1
    let corpus: LabeledCorpus = vec![("a", "x x x"), ("b", "y")].into_iter().collect();
    let vectorizer = Vectorizer::new(TextNormalizer::default(), VectorMethod::TfIdf);
    let vocabulary = vectorizer.fit(&corpus);

    let row = vectorizer.encode_one("x y", &vocabulary);
    assert!((row[0] - 0.5 * (2.0f64 / 3.0).ln()).abs() < 1e-12);
    assert!((row[1] - 0.5 * 2.0f64.ln()).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_out_of_vocabulary_is_silent() -> Result<()> {
    let corpus = corpus()?;
    for method in [VectorMethod::Bow, VectorMethod::TfIdf] {
        let pipeline = TextPipeline::fit(&corpus, NormalizationRule::default_rules(), method)?;
        let vector = pipeline.encode_one("xylophone quasar zeppelin");
        assert_eq!(vector.len(), pipeline.vocabulary_size());
        assert!(vector.iter().all(|&v| v == 0.0));
    }

    Ok(())
}

#[test]
fn test_encoding_is_deterministic() -> Result<()> {
    let corpus = corpus()?;
    for method in [VectorMethod::Bow, VectorMethod::TfIdf] {
        let pipeline = TextPipeline::fit(&corpus, NormalizationRule::default_rules(), method)?;
        let first = pipeline.encode_one("Will it rain, or is it sunny?");
        let second = pipeline.encode_one("Will it rain, or is it sunny?");

        let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    Ok(())
}

#[test]
fn test_fit_is_reproducible() -> Result<()> {
    let normalizer = TextNormalizer::default();
    let first = Vocabulary::fit(&corpus()?, &normalizer);
    let second = Vocabulary::fit(&corpus()?, &normalizer);

    assert_eq!(first, second);
    assert_eq!(first.categories(), &["weather", "greeting", "price"]);
    assert_eq!(
        first.words().take(6).collect::<Vec<_>>(),
        vec!["WILL", "IT", "RAIN", "TOMORROW?", "IS", "SUNNY"]
    );
    // price texts keep their decimal numbers as single words
    assert!(first.word_index("3.14").is_some());
    assert!(first.word_index("12.50").is_some());

    Ok(())
}

#[test]
fn test_training_set_matches_queries() -> Result<()> {
    let corpus = corpus()?;
    let pipeline = TextPipeline::fit(&corpus, NormalizationRule::default_rules(), VectorMethod::TfIdf)?;
    let set = pipeline.training_set(&corpus)?;

    assert_eq!(set.len(), corpus.text_count());
    assert_eq!(set.features[0], pipeline.encode_one("Will it rain tomorrow?"));
    // third weather text comes before the greetings
    assert_eq!(set.features[2], pipeline.encode_one("Rain, rain and more rain"));
    assert_eq!(set.targets[2], vec![1.0, 0.0, 0.0]);
    assert_eq!(set.targets[3], vec![0.0, 1.0, 0.0]);
    assert_eq!(set.targets[6], vec![0.0, 0.0, 1.0]);

    for target in &set.targets {
        assert_eq!(target.iter().sum::<f64>(), 1.0);
    }

    Ok(())
}

#[test]
fn test_decode_examples() {
    let categories = ["X", "Y", "Z"];
    assert_eq!(CategoryDecoder::decode(&[0.2, 0.95, 0.1], &categories), "Y");
    assert_eq!(CategoryDecoder::decode(&[0.5, 0.5, 0.0], &categories), "Unknown");
    assert_eq!(CategoryDecoder::decode(&[0.0, 0.0, 0.0], &categories), "Unknown");
}

#[test]
fn test_pipeline_from_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let corpus_path = dir.path().join("corpus.tsv");
    let vocabulary_path = dir.path().join("vocabulary.txt");
    let config_path = dir.path().join("textcat.json");

    std::fs::File::create(&corpus_path)?.write_all(CORPUS.as_bytes())?;
    std::fs::write(
        &config_path,
        format!(
            r#"{{"method": "TF_IDF", "corpus_path": {:?}, "vocabulary_path": {:?}}}"#,
            corpus_path.to_string_lossy(),
            vocabulary_path.to_string_lossy()
        ),
    )?;

    let config = textcat::config::PipelineConfig::from_file(&config_path)?;
    let (pipeline, corpus) = TextPipeline::from_config(&config)?;
    if let Some(path) = &config.vocabulary_path {
        pipeline.export_vocabulary(path)?;
    }

    assert_eq!(corpus.text_count(), 7);
    assert_eq!(pipeline.vectorizer().method(), VectorMethod::TfIdf);

    let exported = std::fs::read_to_string(&vocabulary_path)?;
    let words: Vec<&str> = exported.lines().collect();
    assert_eq!(words.len(), pipeline.vocabulary_size());
    assert_eq!(
        words,
        pipeline.vocabulary().words().collect::<Vec<_>>()
    );

    Ok(())
}

#[test]
fn test_unwritable_vocabulary_keeps_fit() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let corpus_path = dir.path().join("corpus.tsv");
    std::fs::write(&corpus_path, CORPUS)?;

    let config = textcat::config::PipelineConfig::default()
        .with_corpus_path(&corpus_path)
        .with_vocabulary_path(dir.path().join("missing").join("vocabulary.txt"));
    let (pipeline, corpus) = TextPipeline::from_config(&config)?;

    let path = config.vocabulary_path.as_ref().unwrap();
    assert!(matches!(
        pipeline.export_vocabulary(path),
        Err(TextcatError::Serialization(_))
    ));
    assert_eq!(pipeline.training_set(&corpus)?.len(), 7);

    Ok(())
}

#[test]
fn test_malformed_corpus_aborts() {
    let data = "weather\tWill it rain?\nno text column here\ngreeting\tHi\n";
    assert!(matches!(
        LabeledCorpus::from_reader(data.as_bytes()),
        Err(TextcatError::CorpusParse(_))
    ));
}

#[test]
fn test_invalid_rule_is_configuration_error() {
    assert!(matches!(
        NormalizationRule::with_group(r"(\d),(\d)", ".", 3),
        Err(TextcatError::Configuration(_))
    ));
}

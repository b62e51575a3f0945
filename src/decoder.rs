//! Decoding of classifier output distributions into category labels.

/// Minimum winning probability for a confident verdict.
pub const CONFIDENCE_THRESHOLD: f64 = 0.9;

/// Label returned when no category is confident enough.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Maps a probability distribution to a category label.
///
/// The arg-max scan starts from index 0 with a running maximum of 0 and only
/// moves on a strictly greater value, so ties keep the earliest index. The
/// winner is reported only if its value reaches [`CONFIDENCE_THRESHOLD`];
/// otherwise the verdict is [`UNKNOWN_CATEGORY`].
///
/// # Examples
///
/// ```
/// use textcat::decoder::CategoryDecoder;
///
/// let categories = vec!["X".to_string(), "Y".to_string(), "Z".to_string()];
/// assert_eq!(CategoryDecoder::decode(&[0.2, 0.95, 0.1], &categories), "Y");
/// assert_eq!(CategoryDecoder::decode(&[0.5, 0.5, 0.0], &categories), "Unknown");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryDecoder;

impl CategoryDecoder {
    /// Find the nominal winner: its index and value.
    pub fn arg_max(distribution: &[f64]) -> (usize, f64) {
        let mut max_index = 0;
        let mut max_value = 0.0;
        for (i, &value) in distribution.iter().enumerate() {
            if value > max_value {
                max_value = value;
                max_index = i;
            }
        }
        (max_index, max_value)
    }

    /// Decode a distribution into a category label or [`UNKNOWN_CATEGORY`].
    ///
    /// A confident winner without a matching category (distribution longer
    /// than the category list) also decodes to [`UNKNOWN_CATEGORY`].
    pub fn decode<'a, S: AsRef<str>>(distribution: &[f64], categories: &'a [S]) -> &'a str {
        let (max_index, max_value) = Self::arg_max(distribution);
        if max_value >= CONFIDENCE_THRESHOLD {
            categories
                .get(max_index)
                .map(AsRef::as_ref)
                .unwrap_or(UNKNOWN_CATEGORY)
        } else {
            UNKNOWN_CATEGORY
        }
    }
}

use super::CharFilter;

/// A char filter that converts the whole text to uppercase.
///
/// Uses full Unicode case mapping, so a single character may expand into
/// several (`ß` becomes `SS`).
#[derive(Clone, Debug, Default)]
pub struct UppercaseCharFilter;

impl UppercaseCharFilter {
    /// Create a new uppercase char filter.
    pub fn new() -> Self {
        UppercaseCharFilter
    }
}

impl CharFilter for UppercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_uppercase()
        } else {
            input.to_uppercase()
        }
    }

    fn name(&self) -> &'static str {
        "uppercase"
    }
}

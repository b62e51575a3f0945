use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TextcatError};

/// A char filter that rewrites only the text of one capture group inside each match.
///
/// For every match of `pattern`, each literal occurrence of the selected
/// group's text within the match is replaced with `replacement`, and the
/// rewritten match is spliced back in place. Text outside matches is kept
/// as is, and so is the rest of the match, which lets a rule use
/// surrounding context for matching without consuming it.
///
/// The replacement is literal; group references are not expanded.
///
/// # Examples
///
/// ```
/// use textcat::analysis::char_filter::CharFilter;
/// use textcat::analysis::char_filter::group_replace::GroupReplaceCharFilter;
///
/// let filter = GroupReplaceCharFilter::new(r"\d(,)\d", ".", 1).unwrap();
/// assert_eq!(filter.filter("PRICE 3,14 DOLLARS"), "PRICE 3.14 DOLLARS");
/// ```
#[derive(Debug, Clone)]
pub struct GroupReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    group: usize,
}

impl GroupReplaceCharFilter {
    /// Create a new group replace char filter.
    pub fn new(pattern: &str, replacement: &str, group: usize) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            TextcatError::configuration(format!("invalid pattern {pattern:?}: {e}"))
        })?;
        Self::from_regex(pattern, replacement, group)
    }

    /// Create a filter from an already compiled regex.
    ///
    /// `group` must name an explicit capture group of `pattern` (1 or above).
    pub fn from_regex(pattern: Regex, replacement: &str, group: usize) -> Result<Self> {
        // captures_len() counts the implicit whole-match group 0
        if group == 0 || group >= pattern.captures_len() {
            return Err(TextcatError::configuration(format!(
                "capture group {group} is out of range for pattern {:?} ({} explicit groups)",
                pattern.as_str(),
                pattern.captures_len() - 1
            )));
        }

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
            group,
        })
    }

    /// Get the capture group this filter rewrites.
    pub fn group(&self) -> usize {
        self.group
    }
}

impl CharFilter for GroupReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for caps in self.pattern.captures_iter(input) {
            let Some(whole) = caps.get(0) else {
                continue;
            };

            output.push_str(&input[last_match_end..whole.start()]);

            match caps.get(self.group) {
                Some(group) => {
                    output.push_str(&whole.as_str().replace(group.as_str(), &self.replacement))
                }
                // Group did not take part in this match
                None => output.push_str(whole.as_str()),
            }

            last_match_end = whole.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "group_replace"
    }
}

//! Classifier trait definition.
//!
//! The model itself lives outside this crate. Anything that turns a feature
//! vector into a probability distribution over the fitted categories can be
//! plugged into [`TextPipeline::classify`](crate::pipeline::TextPipeline::classify)
//! by implementing [`Classifier`].

use crate::error::Result;

/// A trained model mapping feature vectors to category probabilities.
///
/// Implementations receive vectors of width `vocabulary_size()` and must
/// return a distribution of length `category_size()`, in category index order.
pub trait Classifier: Send + Sync {
    /// Predict the probability distribution for one feature vector.
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

impl<F> Classifier for F
where
    F: Fn(&[f64]) -> Result<Vec<f64>> + Send + Sync,
{
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        self(features)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

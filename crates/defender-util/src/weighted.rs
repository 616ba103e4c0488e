//! Weighted random selection.

use rand::Rng;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use thiserror::Error;

/// Errors from the slice helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UtilError {
    /// Items and weights disagree, or the weights are unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Pick one of `items`, each with probability proportional to its weight.
///
/// # Errors
///
/// [`UtilError::InvalidArgument`] when the slices differ in length, are
/// empty, contain a negative or non-finite weight, or all weights are zero.
pub fn choose_weighted<'a, T, R>(
    items: &'a [T],
    weights: &[f64],
    rng: &mut R,
) -> Result<&'a T, UtilError>
where
    R: Rng + ?Sized,
{
    if items.len() != weights.len() {
        return Err(UtilError::InvalidArgument(format!(
            "{} items but {} weights",
            items.len(),
            weights.len()
        )));
    }
    if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
        return Err(UtilError::InvalidArgument(format!(
            "weights must be finite, got {w}"
        )));
    }
    let dist = WeightedIndex::<f64>::new(weights).map_err(|e| {
        UtilError::InvalidArgument(match e {
            WeightedError::NoItem => "no items to choose from".to_string(),
            WeightedError::InvalidWeight => "weights must be non-negative".to_string(),
            WeightedError::AllWeightsZero => "all weights are zero".to_string(),
            other => other.to_string(),
        })
    })?;
    Ok(&items[dist.sample(rng)])
}

/// Scale `weights` so they sum to one.
///
/// A slice summing to zero is returned unchanged.
#[must_use]
pub fn normalized(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return weights.to_vec();
    }
    weights.iter().map(|w| w / total).collect()
}

//! Server-side reference of the client's weighted selection.
//!
//! The embedded script draws a uniform value in `[0, totalWeight)` and
//! subtracts candidate weights in list order until the remainder reaches
//! zero. This module is the canonical statement of that algorithm; the
//! JavaScript in [`crate::script`] mirrors it.

/// Pick the index selected by uniform draw `u` (in `[0, 1)`) over
/// `weights`.
///
/// Non-finite and non-positive weights are skipped. Returns `None` when no
/// weight is positive. If floating-point drift leaves a remainder after the
/// last candidate, that candidate wins.
#[must_use]
pub fn choose_weighted(weights: &[f64], u: f64) -> Option<usize> {
    let total: f64 = weights.iter().filter(|w| w.is_finite() && **w > 0.0).sum();
    if total <= 0.0 {
        return None;
    }

    let mut threshold = u * total;
    let mut last = None;
    for (index, weight) in weights.iter().enumerate() {
        if !weight.is_finite() || *weight <= 0.0 {
            continue;
        }
        last = Some(index);
        threshold -= weight;
        if threshold <= 0.0 {
            return Some(index);
        }
    }
    last
}

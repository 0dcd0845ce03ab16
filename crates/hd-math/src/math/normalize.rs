//! Linear-domain probability normalization.

/// Normalize a slice of non-negative masses into a probability distribution.
///
/// Returns a vector of NaNs when the sum is zero or non-finite; callers
/// decide how to surface that (the inference engine maps it to an
/// unsatisfiable-evidence error).
pub fn normalize_probs(values: &[f64]) -> Vec<f64> {
    let sum: f64 = values.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return vec![f64::NAN; values.len()];
    }
    values.iter().map(|v| v / sum).collect()
}

/// Check that `values` forms a probability distribution summing to 1 within
/// `tol`, with every entry finite.
pub fn sums_to_one(values: &[f64], tol: f64) -> bool {
    if values.iter().any(|v| !v.is_finite()) {
        return false;
    }
    let sum: f64 = values.iter().sum();
    (sum - 1.0).abs() <= tol
}

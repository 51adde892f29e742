//! Validation helpers shared across the solver surface.
//!
//! This module centralizes the consistency checks used at component
//! boundaries:
//!
//! - **Shape checks**: [`validate_point`], [`validate_gradients`] enforce the
//!   declared dimensions (n for points, m×n for gradient matrices) and fail
//!   fast instead of silently broadcasting or truncating.
//! - **Finiteness checks**: NaN and ±∞ entries are rejected with the index
//!   and value of the first offender.
//! - **Option checks**: [`verify_positive`], [`verify_non_negative`],
//!   [`verify_open_unit`] standardize the rules for numeric configuration.
//!
//! All helpers report domain-specific [`SolverError`] variants so that
//! higher-level code stays uniform.

use crate::solvers::{
    errors::{SolveResult, SolverError},
    types::{GradMatrix, Point},
};

/// Validate a point against dimension and finiteness.
///
/// # Errors
/// - [`SolverError::ShapeMismatch`] if `x.len() != dim`.
/// - [`SolverError::NonFiniteValue`] for the first NaN or infinite entry.
pub fn validate_point(what: &'static str, x: &Point, dim: usize) -> SolveResult<()> {
    if x.len() != dim {
        return Err(SolverError::ShapeMismatch { what, expected: dim, found: x.len() });
    }
    for (index, &value) in x.iter().enumerate() {
        if !value.is_finite() {
            return Err(SolverError::NonFiniteValue { what, index, value });
        }
    }
    Ok(())
}

/// Validate a gradient matrix: m rows (one per objective), n columns, all
/// entries finite.
///
/// # Errors
/// - [`SolverError::ShapeMismatch`] on a row or column count violation.
/// - [`SolverError::NonFiniteValue`] for the first non-finite entry, reported
///   with its flat (row-major) index.
pub fn validate_gradients(grads: &GradMatrix, m: usize, n: usize) -> SolveResult<()> {
    if grads.nrows() != m {
        return Err(SolverError::ShapeMismatch {
            what: "gradient rows",
            expected: m,
            found: grads.nrows(),
        });
    }
    if grads.ncols() != n {
        return Err(SolverError::ShapeMismatch {
            what: "gradient columns",
            expected: n,
            found: grads.ncols(),
        });
    }
    for (index, &value) in grads.iter().enumerate() {
        if !value.is_finite() {
            return Err(SolverError::NonFiniteValue { what: "gradient matrix", index, value });
        }
    }
    Ok(())
}

/// Require a finite, strictly positive option value.
pub fn verify_positive(name: &'static str, value: f64) -> SolveResult<()> {
    if !value.is_finite() {
        return Err(SolverError::InvalidOption { name, value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(SolverError::InvalidOption { name, value, reason: "must be positive" });
    }
    Ok(())
}

/// Require a finite, non-negative option value.
pub fn verify_non_negative(name: &'static str, value: f64) -> SolveResult<()> {
    if !value.is_finite() {
        return Err(SolverError::InvalidOption { name, value, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(SolverError::InvalidOption { name, value, reason: "must be non-negative" });
    }
    Ok(())
}

/// Require an option value strictly inside the open interval (0, 1).
pub fn verify_open_unit(name: &'static str, value: f64) -> SolveResult<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(SolverError::InvalidOption {
            name,
            value,
            reason: "must lie strictly between 0 and 1",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn validate_point_rejects_wrong_length_and_nan() {
        let x = array![1.0, 2.0];
        assert!(validate_point("x", &x, 2).is_ok());
        assert!(matches!(
            validate_point("x", &x, 3),
            Err(SolverError::ShapeMismatch { expected: 3, found: 2, .. })
        ));

        let bad = array![1.0, f64::NAN];
        assert!(matches!(
            validate_point("x", &bad, 2),
            Err(SolverError::NonFiniteValue { index: 1, .. })
        ));
    }

    #[test]
    fn validate_gradients_checks_both_dimensions() {
        let grads = array![[1.0, 0.0], [0.0, 1.0]];
        assert!(validate_gradients(&grads, 2, 2).is_ok());
        assert!(validate_gradients(&grads, 3, 2).is_err());
        assert!(validate_gradients(&grads, 2, 3).is_err());
    }

    #[test]
    fn option_checks_enforce_documented_ranges() {
        assert!(verify_positive("eta_init", 1.0).is_ok());
        assert!(verify_positive("eta_init", 0.0).is_err());
        assert!(verify_positive("eta_init", f64::INFINITY).is_err());
        assert!(verify_non_negative("c1", 0.0).is_ok());
        assert!(verify_non_negative("c1", -1e-9).is_err());
        assert!(verify_open_unit("gamma", 0.5).is_ok());
        assert!(verify_open_unit("gamma", 1.0).is_err());
        assert!(verify_open_unit("gamma", 0.0).is_err());
    }
}

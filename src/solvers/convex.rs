//! solvers::convex — minimum-norm point in the convex hull of gradients.
//!
//! Purpose
//! -------
//! Solve the direction-finding sub-problem of multiple-gradient descent:
//! given an m×n gradient matrix `G`, find weights `alpha` on the probability
//! simplex minimizing `‖alphaᵀG‖²`. Geometrically this is the minimum-norm
//! point in the convex hull of the m gradient row vectors; its negation is a
//! common descent direction for all objectives, and it vanishes exactly at
//! Pareto-stationary points.
//!
//! Key behaviors
//! -------------
//! - Reduce the problem to the m×m Gram matrix `M = G Gᵀ` and run a
//!   Wolfe-style active-set iteration over supports of the simplex.
//! - Solve each reduced equality-constrained sub-problem through its KKT
//!   system with a dense `nalgebra` LU factorization.
//! - Certify global optimality with the simplex KKT condition
//!   `min_j (M alpha)_j >= alphaᵀ M alpha - tol` before returning.
//!
//! Invariants & assumptions
//! ------------------------
//! - The feasible simplex is non-empty and compact, so the quadratic program
//!   always has a bounded optimum; there is no infeasibility handling beyond
//!   solver-failure propagation.
//! - The quadratic objective is convex, so the minimum-norm combination
//!   `alphaᵀG` is unique. `alpha` itself need not be unique when gradients
//!   are linearly dependent; any optimal weight vector is acceptable.
//! - Iteration caps convert numerical cycling into
//!   [`SolverError::SolverFailure`] rather than looping.

use crate::solvers::{
    errors::{SolveResult, SolverError},
    types::{GradMatrix, Weights},
};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// Relative tolerance for the simplex KKT optimality certificate.
const KKT_TOL: f64 = 1e-10;

/// Weights at or below this value are treated as off the support.
const DROP_TOL: f64 = 1e-12;

/// Minimum-norm convex combination of the gradient rows.
///
/// Returns `alpha` with `alpha >= 0` elementwise and `sum(alpha) = 1`
/// minimizing `‖alphaᵀG‖²`. The single-objective case is trivially `[1.0]`.
///
/// # Errors
/// - [`SolverError::ShapeMismatch`] for an empty gradient matrix.
/// - [`SolverError::NonFiniteValue`] for NaN or infinite gradient entries.
/// - [`SolverError::SolverFailure`] if a reduced KKT system is singular or
///   the active-set iteration fails to certify optimality within its cap.
pub fn min_norm_weights(grads: &GradMatrix) -> SolveResult<Weights> {
    let m = grads.nrows();
    let n = grads.ncols();
    if m == 0 {
        return Err(SolverError::ShapeMismatch { what: "gradient rows", expected: 1, found: 0 });
    }
    if n == 0 {
        return Err(SolverError::ShapeMismatch { what: "gradient columns", expected: 1, found: 0 });
    }
    for (index, &value) in grads.iter().enumerate() {
        if !value.is_finite() {
            return Err(SolverError::NonFiniteValue { what: "gradient matrix", index, value });
        }
    }
    if m == 1 {
        return Ok(Array1::from_elem(1, 1.0));
    }

    let gram = grads.dot(&grads.t());
    let scale = 1.0 + gram.diag().iter().fold(0.0_f64, |acc, &d| acc.max(d.abs()));
    let tol = KKT_TOL * scale;

    // Start from the vertex with the shortest gradient.
    let start = gram
        .diag()
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let mut alpha: Weights = Array1::zeros(m);
    alpha[start] = 1.0;
    let mut support: Vec<usize> = vec![start];

    let max_major = 16 * (m + 1);
    for _ in 0..max_major {
        // Optimality check: at a reduced-KKT solution every support index
        // satisfies (M alpha)_i = alphaᵀ M alpha, so a strictly smaller entry
        // elsewhere identifies a descent vertex.
        let q = gram.dot(&alpha);
        let value = alpha.dot(&q);
        let mut entering = 0;
        let mut q_min = q[0];
        for (i, &v) in q.iter().enumerate().skip(1) {
            if v < q_min {
                entering = i;
                q_min = v;
            }
        }
        if q_min >= value - tol {
            return Ok(alpha);
        }
        if !support.contains(&entering) {
            support.push(entering);
        }

        // Minor cycles: re-solve on the support, stepping toward the
        // unconstrained-on-support solution and dropping blocking indices
        // until the solution is feasible. Each pass removes at least one
        // index, so m + 1 passes suffice.
        let mut settled = false;
        for _ in 0..=m {
            let beta = solve_reduced_kkt(&gram, &support)?;
            if beta.iter().all(|&b| b >= -tol) {
                alpha.fill(0.0);
                for (idx, &i) in support.iter().enumerate() {
                    alpha[i] = beta[idx].max(0.0);
                }
                let total = alpha.sum();
                if total <= 0.0 {
                    return Err(SolverError::SolverFailure {
                        reason: "reduced KKT solution collapsed to zero weights".to_string(),
                    });
                }
                alpha /= total;
                support.retain(|&i| alpha[i] > DROP_TOL);
                settled = true;
                break;
            }

            // Step from alpha toward beta until the first weight hits zero.
            let mut theta = 1.0_f64;
            for (idx, &i) in support.iter().enumerate() {
                if beta[idx] < 0.0 {
                    let denom = alpha[i] - beta[idx];
                    if denom > 0.0 {
                        theta = theta.min(alpha[i] / denom);
                    }
                }
            }
            for (idx, &i) in support.iter().enumerate() {
                alpha[i] = (1.0 - theta) * alpha[i] + theta * beta[idx];
            }
            support.retain(|&i| {
                if alpha[i] <= DROP_TOL {
                    alpha[i] = 0.0;
                    false
                } else {
                    true
                }
            });
            if support.is_empty() {
                return Err(SolverError::SolverFailure {
                    reason: "active set emptied during minor cycle".to_string(),
                });
            }
        }
        if !settled {
            return Err(SolverError::SolverFailure {
                reason: "minor cycle failed to reach a feasible support solution".to_string(),
            });
        }
    }

    Err(SolverError::SolverFailure {
        reason: format!("active-set iteration cap ({max_major}) reached without optimality"),
    })
}

/// Solve the equality-constrained sub-problem restricted to `support`.
///
/// Minimizes `betaᵀ M_SS beta` subject to `sum(beta) = 1` through its KKT
/// system `[2 M_SS, 1; 1ᵀ, 0] [beta; lambda] = [0; 1]`, returning the
/// (possibly sign-indefinite) weights over the support.
fn solve_reduced_kkt(gram: &Array2<f64>, support: &[usize]) -> SolveResult<Vec<f64>> {
    let k = support.len();
    let mut kkt = DMatrix::<f64>::zeros(k + 1, k + 1);
    for (a, &i) in support.iter().enumerate() {
        for (b, &j) in support.iter().enumerate() {
            kkt[(a, b)] = 2.0 * gram[[i, j]];
        }
        kkt[(a, k)] = 1.0;
        kkt[(k, a)] = 1.0;
    }
    let mut rhs = DVector::<f64>::zeros(k + 1);
    rhs[k] = 1.0;

    let solution = kkt.lu().solve(&rhs).ok_or_else(|| SolverError::SolverFailure {
        reason: "singular reduced KKT system".to_string(),
    })?;
    Ok(solution.iter().take(k).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::types::l2_norm;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Feasibility (simplex membership) and optimality of the returned
    //   weights on small hand-checkable gradient sets.
    // - The trivial single-objective case and shape failures.
    //
    // Randomized feasibility/optimality sweeps live in
    // tests/convex_proptests.rs.
    // -------------------------------------------------------------------------

    fn combination_norm(grads: &GradMatrix, alpha: &Weights) -> f64 {
        l2_norm(&alpha.dot(grads))
    }

    #[test]
    fn single_objective_returns_unit_weight() {
        let grads = array![[3.0, -4.0]];
        let alpha = min_norm_weights(&grads).unwrap();
        assert_eq!(alpha.len(), 1);
        assert!((alpha[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    // Opposing gradients of equal length: the hull contains the origin and
    // the optimal combination is the zero vector at alpha = (1/2, 1/2).
    fn opposing_gradients_cancel_exactly() {
        let grads = array![[1.0, 0.0], [-1.0, 0.0]];
        let alpha = min_norm_weights(&grads).unwrap();
        assert!((alpha.sum() - 1.0).abs() < 1e-9);
        assert!((alpha[0] - 0.5).abs() < 1e-9);
        assert!(combination_norm(&grads, &alpha) < 1e-9);
    }

    #[test]
    // Orthogonal unit gradients: minimum-norm point of the segment between
    // e1 and e2 is the midpoint, with squared norm 1/2.
    fn orthogonal_gradients_split_evenly() {
        let grads = array![[1.0, 0.0], [0.0, 1.0]];
        let alpha = min_norm_weights(&grads).unwrap();
        assert!((alpha[0] - 0.5).abs() < 1e-9);
        assert!((alpha[1] - 0.5).abs() < 1e-9);
        let norm_sq = combination_norm(&grads, &alpha).powi(2);
        assert!((norm_sq - 0.5).abs() < 1e-9);
    }

    #[test]
    // Collinear gradients of different lengths: the minimum-norm point of
    // the hull is the shorter gradient itself (a vertex solution).
    fn collinear_gradients_pick_the_shorter_vertex() {
        let grads = array![[1.0, 0.0], [3.0, 0.0]];
        let alpha = min_norm_weights(&grads).unwrap();
        assert!((alpha[0] - 1.0).abs() < 1e-9);
        assert!(alpha[1].abs() < 1e-9);
    }

    #[test]
    // Three gradients where the optimum lies on a two-vertex face.
    fn three_objectives_settle_on_a_face() {
        let grads = array![[2.0, 0.0], [-2.0, 0.2], [0.0, 5.0]];
        let alpha = min_norm_weights(&grads).unwrap();
        assert!(alpha.iter().all(|&a| a >= -1e-9));
        assert!((alpha.sum() - 1.0).abs() < 1e-9);

        // Compare against a coarse sweep over the simplex.
        let best = combination_norm(&grads, &alpha).powi(2);
        let steps = 60;
        for i in 0..=steps {
            for j in 0..=(steps - i) {
                let a = i as f64 / steps as f64;
                let b = j as f64 / steps as f64;
                let trial = array![a, b, 1.0 - a - b];
                let trial_norm = combination_norm(&grads, &trial).powi(2);
                assert!(best <= trial_norm + 1e-8);
            }
        }
    }

    #[test]
    fn empty_gradient_matrix_is_a_shape_error() {
        let grads = GradMatrix::zeros((0, 3));
        assert!(matches!(min_norm_weights(&grads), Err(SolverError::ShapeMismatch { .. })));
        let grads = GradMatrix::zeros((2, 0));
        assert!(matches!(min_norm_weights(&grads), Err(SolverError::ShapeMismatch { .. })));
    }

    #[test]
    fn non_finite_gradients_are_rejected() {
        let grads = array![[1.0, f64::NAN], [0.0, 1.0]];
        assert!(matches!(min_norm_weights(&grads), Err(SolverError::NonFiniteValue { .. })));
    }

    #[test]
    // Duplicated rows make alpha non-unique; any simplex point with the
    // correct combination is acceptable.
    fn duplicate_gradients_still_produce_the_optimal_combination() {
        let grads = array![[1.0, 1.0], [1.0, 1.0]];
        let alpha = min_norm_weights(&grads).unwrap();
        assert!((alpha.sum() - 1.0).abs() < 1e-9);
        let combo = alpha.dot(&grads);
        assert!((combo[0] - 1.0).abs() < 1e-9);
        assert!((combo[1] - 1.0).abs() < 1e-9);
    }
}

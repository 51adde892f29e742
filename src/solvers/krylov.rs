//! solvers::krylov — truncated matrix-free MINRES for symmetric operators.
//!
//! Purpose
//! -------
//! Approximately solve `A v = b` for a symmetric, possibly indefinite linear
//! operator given only through its action on a vector. The solver runs the
//! Lanczos recurrence with Givens-rotation updates (Paige-Saunders MINRES)
//! and stops at a fixed small iteration cap. That truncation is the defining
//! design choice here: the tangent expander only needs a usable approximate
//! direction, and each extra iteration costs one Hessian-vector product, so
//! partial convergence is expected and accepted, never an error.
//!
//! Key behaviors
//! -------------
//! - Matrix-free: the operator is any `FnMut(&Point) -> Point`; no matrix is
//!   ever formed. The operator is symmetric, so forward and adjoint
//!   applications coincide in the one evaluation.
//! - Exact solves fall out naturally: on the identity operator the first
//!   Lanczos step exhausts the Krylov space and the solver returns `b`
//!   after one iteration for any cap >= 1.
//! - A zero right-hand side short-circuits to the zero solution.
//!
//! Conventions
//! -----------
//! - `MinresOutcome::converged` reports whether the residual fell below
//!   `rel_tol * ‖b‖`; callers deciding whether to use a partial result can
//!   inspect `residual_norm` and `iterations`.

use crate::solvers::{
    errors::{SolveResult, SolverError},
    types::{l2_norm, Point, DEFAULT_KRYLOV_ITERS},
    validation::verify_positive,
};
use ndarray::Array1;

/// Configuration for the truncated solve.
///
/// - `max_iters`: hard cap on Lanczos steps, i.e. on operator applications.
/// - `rel_tol`: relative residual target; reaching it early stops the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinresOptions {
    pub max_iters: usize,
    pub rel_tol: f64,
}

impl MinresOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// [`SolverError::InvalidOption`] for a zero cap or a non-positive
    /// tolerance.
    pub fn new(max_iters: usize, rel_tol: f64) -> SolveResult<Self> {
        if max_iters == 0 {
            return Err(SolverError::InvalidOption {
                name: "max_iters",
                value: 0.0,
                reason: "must be positive",
            });
        }
        verify_positive("rel_tol", rel_tol)?;
        Ok(Self { max_iters, rel_tol })
    }
}

impl Default for MinresOptions {
    fn default() -> Self {
        Self { max_iters: DEFAULT_KRYLOV_ITERS, rel_tol: 1e-10 }
    }
}

/// Result of a truncated MINRES solve.
#[derive(Debug, Clone, PartialEq)]
pub struct MinresOutcome {
    /// Best solution estimate after the final iteration.
    pub solution: Point,
    /// Lanczos steps performed (equals operator applications).
    pub iterations: usize,
    /// Final residual norm `‖b − A·solution‖` as tracked by the recurrence.
    pub residual_norm: f64,
    /// Whether the residual reached `rel_tol * ‖b‖`.
    pub converged: bool,
}

/// Minimum-residual solve of `A v = b` with at most `opts.max_iters`
/// applications of the symmetric operator `apply`.
pub fn minres<F>(mut apply: F, rhs: &Point, opts: &MinresOptions) -> MinresOutcome
where
    F: FnMut(&Point) -> Point,
{
    let n = rhs.len();
    let mut x = Array1::<f64>::zeros(n);
    let beta1 = l2_norm(rhs);
    if beta1 == 0.0 {
        return MinresOutcome { solution: x, iterations: 0, residual_norm: 0.0, converged: true };
    }

    // Lanczos vectors and the two most recent direction updates.
    let mut r1 = rhs.clone();
    let mut r2 = rhs.clone();
    let mut w_prev = Array1::<f64>::zeros(n);
    let mut w_prev2 = Array1::<f64>::zeros(n);

    let mut oldb = 0.0_f64;
    let mut beta = beta1;
    let mut dbar = 0.0_f64;
    let mut epsln = 0.0_f64;
    let mut phibar = beta1;
    let (mut cs, mut sn) = (-1.0_f64, 0.0_f64);

    let mut iterations = 0;
    while iterations < opts.max_iters {
        iterations += 1;

        // Lanczos step: orthogonalize A v against the two previous vectors.
        let v = &r2 / beta;
        let mut y = apply(&v);
        if iterations >= 2 {
            y.scaled_add(-(beta / oldb), &r1);
        }
        let alfa = v.dot(&y);
        y.scaled_add(-(alfa / beta), &r2);
        r1 = std::mem::replace(&mut r2, y);
        oldb = beta;
        beta = l2_norm(&r2);

        // Fold the new column of the tridiagonal into the running QR via
        // the previous and current Givens rotations.
        let oldeps = epsln;
        let delta = cs * dbar + sn * alfa;
        let gbar = sn * dbar - cs * alfa;
        epsln = sn * beta;
        dbar = -cs * beta;
        let gamma = (gbar * gbar + beta * beta).sqrt().max(f64::EPSILON);
        cs = gbar / gamma;
        sn = beta / gamma;
        let phi = cs * phibar;
        phibar = sn * phibar;

        // Update the solution along the new conjugate direction.
        let mut w = v;
        w.scaled_add(-oldeps, &w_prev2);
        w.scaled_add(-delta, &w_prev);
        w /= gamma;
        x.scaled_add(phi, &w);
        w_prev2 = std::mem::replace(&mut w_prev, w);

        if phibar <= opts.rel_tol * beta1 || beta <= f64::EPSILON * beta1 {
            break;
        }
    }

    let converged = phibar <= opts.rel_tol * beta1;
    MinresOutcome { solution: x, iterations, residual_norm: phibar, converged }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // - Exact one-step solve on the identity, verifying the matrix-free
    //   wiring independent of any Hessian specifics.
    // - Exact solves on small symmetric (including indefinite) operators
    //   within n iterations.
    // - Truncation returns a usable partial result without erroring.
    // -------------------------------------------------------------------------

    #[test]
    fn identity_operator_solves_in_one_iteration_for_any_cap() {
        let b = array![3.0, -1.0, 2.0];
        for cap in [1usize, 2, 10] {
            let opts = MinresOptions::new(cap, 1e-12).unwrap();
            let outcome = minres(|v| v.clone(), &b, &opts);
            assert_eq!(outcome.iterations, 1);
            assert!(outcome.converged);
            for (a, e) in outcome.solution.iter().zip(b.iter()) {
                assert!((a - e).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn zero_rhs_returns_zero_without_applying_the_operator() {
        let b = array![0.0, 0.0];
        let mut applications = 0;
        let outcome = minres(
            |v| {
                applications += 1;
                v.clone()
            },
            &b,
            &MinresOptions::default(),
        );
        assert_eq!(applications, 0);
        assert_eq!(outcome.iterations, 0);
        assert!(outcome.converged);
        assert!(outcome.solution.iter().all(|&s| s == 0.0));
    }

    #[test]
    // Indefinite diagonal operator: MINRES handles negative eigenvalues,
    // which is why it (and not CG) backs the tangent solver.
    fn indefinite_diagonal_operator_is_solved_exactly_within_n_steps() {
        let diag = array![2.0, -1.0, 0.5];
        let b = array![1.0, 1.0, 1.0];
        let opts = MinresOptions::new(10, 1e-10).unwrap();
        let outcome = minres(|v| &diag * v, &b, &opts);
        assert!(outcome.converged);
        assert!(outcome.iterations <= 3);
        let expected = array![0.5, -1.0, 2.0];
        for (a, e) in outcome.solution.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-8, "got {a}, expected {e}");
        }
    }

    #[test]
    fn truncated_solve_reports_partial_convergence() {
        // 4-dimensional operator, cap of 1: the result cannot be exact but
        // must still be a finite, non-trivial direction.
        let diag = array![4.0, 3.0, 2.0, 1.0];
        let b = array![1.0, 1.0, 1.0, 1.0];
        let opts = MinresOptions::new(1, 1e-14).unwrap();
        let outcome = minres(|v| &diag * v, &b, &opts);
        assert_eq!(outcome.iterations, 1);
        assert!(!outcome.converged);
        assert!(outcome.residual_norm > 0.0);
        assert!(outcome.solution.iter().all(|s| s.is_finite()));
        assert!(crate::solvers::types::l2_norm(&outcome.solution) > 0.0);
    }

    #[test]
    fn options_are_validated() {
        assert!(MinresOptions::new(0, 1e-10).is_err());
        assert!(MinresOptions::new(5, 0.0).is_err());
        assert!(MinresOptions::new(5, 1e-10).is_ok());
    }
}

//! solvers::mgda — multiple-gradient descent onto the Pareto set.
//!
//! Purpose
//! -------
//! Drive an arbitrary starting point to (numerical) Pareto stationarity by
//! repeating: evaluate objectives and gradients, compute the minimum-norm
//! convex combination of the gradients, move opposite to it, and pick the
//! step length with the multi-objective Armijo search. Because the descent
//! direction is the negated minimum-norm hull point, every objective is
//! non-increasing along it, and the loop makes simultaneous progress on all
//! objectives until the combination vanishes.
//!
//! Key behaviors
//! -------------
//! - Dual termination: stop when `‖d‖` drops below the convergence threshold
//!   (Pareto-stationary) or when the accepted step `eta·‖d‖` does (progress
//!   stalled with a non-trivial direction). Either way the current iterate
//!   is returned.
//! - Sanity invariant: every gradient must have a non-positive dot product
//!   with the direction, up to tolerance. A violation indicates a
//!   direction-finding bug and aborts with
//!   [`SolverError::DescentInvariantViolation`] instead of proceeding with a
//!   bad direction.
//! - Hardening: the base algorithm has no iteration cap; `max_iters`
//!   converts a loop that cannot meet its thresholds into
//!   [`SolverError::MaxIterationsExceeded`].

use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::{
    convex::min_norm_weights,
    errors::{SolveResult, SolverError},
    line_search::{backtracking_search, LineSearchOptions},
    types::{l2_norm, Point, DEFAULT_MAX_ITERS, DEFAULT_TOL},
    validation::{validate_gradients, validate_point, verify_positive},
};

/// Configuration for the MGDA loop.
///
/// - `tol`: convergence threshold shared by the stationarity check on `‖d‖`
///   and the stall check on `eta·‖d‖`.
/// - `tol_descent`: numerical slack for the non-ascent invariant.
/// - `max_iters`: hardening cap on descent iterations.
/// - `line_search`: options forwarded to the Armijo search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerOptions {
    pub tol: f64,
    pub tol_descent: f64,
    pub max_iters: usize,
    pub line_search: LineSearchOptions,
}

impl OptimizerOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// [`SolverError::InvalidOption`] for non-positive tolerances or a zero
    /// iteration cap.
    pub fn new(
        tol: f64, tol_descent: f64, max_iters: usize, line_search: LineSearchOptions,
    ) -> SolveResult<Self> {
        verify_positive("tol", tol)?;
        verify_positive("tol_descent", tol_descent)?;
        if max_iters == 0 {
            return Err(SolverError::InvalidOption {
                name: "max_iters",
                value: 0.0,
                reason: "must be positive",
            });
        }
        Ok(Self { tol, tol_descent, max_iters, line_search })
    }
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            tol_descent: 1e-8,
            max_iters: DEFAULT_MAX_ITERS,
            line_search: LineSearchOptions::default(),
        }
    }
}

/// The MGDA optimizer. Stateless apart from its options; one instance can
/// optimize any number of points sequentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParetoOptimizer {
    opts: OptimizerOptions,
}

impl ParetoOptimizer {
    pub fn new(opts: OptimizerOptions) -> Self {
        Self { opts }
    }

    pub fn with_defaults() -> Self {
        Self::new(OptimizerOptions::default())
    }

    pub fn options(&self) -> &OptimizerOptions {
        &self.opts
    }

    /// Drive `x` to the Pareto set, returning the final iterate.
    ///
    /// # Errors
    /// - [`SolverError::ShapeMismatch`] / [`SolverError::NonFiniteValue`] for
    ///   malformed inputs or model outputs.
    /// - [`SolverError::SolverFailure`] from the convex sub-problem.
    /// - [`SolverError::DescentInvariantViolation`] if the direction ascends
    ///   some objective beyond tolerance.
    /// - [`SolverError::MaxIterationsExceeded`] from the loop caps.
    pub fn optimize<M: ObjectiveModel + ?Sized>(
        &self, model: &M, counters: &mut EvalCounters, x: Point,
    ) -> SolveResult<Point> {
        let n = model.dim();
        let m = model.num_objectives();
        validate_point("starting point", &x, n)?;

        let mut x = x;
        for _ in 0..self.opts.max_iters {
            let f0 = model.objectives(&x, counters);
            let grads = model.gradients(&x, counters);
            validate_gradients(&grads, m, n)?;

            let alpha = min_norm_weights(&grads)?;
            // The combination solver produces the minimum-norm hull point;
            // descent moves opposite to it.
            let direction = -alpha.dot(&grads);

            let d_norm = l2_norm(&direction);
            for (i, g) in grads.rows().into_iter().enumerate() {
                let dot = g.dot(&direction);
                let allowed = self.opts.tol_descent * (1.0 + l2_norm(&g.to_owned()) * d_norm);
                if dot > allowed {
                    return Err(SolverError::DescentInvariantViolation {
                        objective: i,
                        dot,
                        tol: allowed,
                    });
                }
            }

            if d_norm < self.opts.tol {
                return Ok(x);
            }

            let eta = backtracking_search(
                model,
                counters,
                &x,
                &f0,
                &grads,
                &direction,
                &self.opts.line_search,
            )?;
            if eta * d_norm < self.opts.tol {
                return Ok(x);
            }
            x.scaled_add(eta, &direction);
        }
        Err(SolverError::MaxIterationsExceeded {
            what: "pareto optimizer",
            limit: self.opts.max_iters,
        })
    }
}

//! solvers::line_search — backtracking Armijo search over all objectives.
//!
//! Purpose
//! -------
//! Given a common descent direction, find a step length that produces
//! sufficient decrease for **every** objective simultaneously. Starting from
//! `eta_init`, the step shrinks by a fixed decay factor until the Armijo
//! condition
//!
//! ```text
//! f_i(x + eta d) <= f_i(x) + c1 * eta * dot(grad_i, d)    for all i
//! ```
//!
//! holds, which a first-order Taylor argument guarantees for small enough
//! `eta` whenever `d` is a descent direction. The base algorithm has no
//! lower cutoff on `eta`; the `max_shrinks` cap is the required hardening
//! that converts non-termination on pathological objectives into a reported
//! [`SolverError::MaxIterationsExceeded`].
//!
//! Conventions
//! -----------
//! - The caller has already verified `d` to be non-ascending for every
//!   objective; this routine does not re-check the invariant.
//! - The step never grows: the returned `eta` satisfies `eta <= eta_init`.
//! - Every trial evaluation goes through the model and increments the
//!   objective counter.

use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::{
    errors::{SolveResult, SolverError},
    types::{GradMatrix, ObjectiveVec, Point, DEFAULT_C1, DEFAULT_DECAY, DEFAULT_MAX_SHRINKS},
    validation::{verify_non_negative, verify_open_unit, verify_positive},
};

/// Configuration for the backtracking search.
///
/// - `eta_init`: first trial step, strictly positive.
/// - `c1`: sufficient-decrease constant, non-negative (0 accepts any
///   non-increase).
/// - `gamma`: geometric decay factor, strictly inside (0, 1).
/// - `max_shrinks`: hardening cap on the number of shrink steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchOptions {
    pub eta_init: f64,
    pub c1: f64,
    pub gamma: f64,
    pub max_shrinks: usize,
}

impl LineSearchOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// [`SolverError::InvalidOption`] when a field is outside its documented
    /// range (`eta_init > 0`, `c1 >= 0`, `0 < gamma < 1`, `max_shrinks > 0`).
    pub fn new(eta_init: f64, c1: f64, gamma: f64, max_shrinks: usize) -> SolveResult<Self> {
        verify_positive("eta_init", eta_init)?;
        verify_non_negative("c1", c1)?;
        verify_open_unit("gamma", gamma)?;
        if max_shrinks == 0 {
            return Err(SolverError::InvalidOption {
                name: "max_shrinks",
                value: 0.0,
                reason: "must be positive",
            });
        }
        Ok(Self { eta_init, c1, gamma, max_shrinks })
    }
}

impl Default for LineSearchOptions {
    fn default() -> Self {
        Self {
            eta_init: 1.0,
            c1: DEFAULT_C1,
            gamma: DEFAULT_DECAY,
            max_shrinks: DEFAULT_MAX_SHRINKS,
        }
    }
}

/// Backtracking search for a simultaneous-descent step length.
///
/// `f0` and `grads` are the objective values and gradients already computed
/// at `x`; `direction` is the candidate descent direction. Returns the first
/// `eta` in the geometric sequence `eta_init * gamma^k` whose trial point
/// satisfies the Armijo condition for all objectives.
///
/// # Errors
/// [`SolverError::MaxIterationsExceeded`] once `max_shrinks` trial steps have
/// been rejected.
pub fn backtracking_search<M: ObjectiveModel + ?Sized>(
    model: &M, counters: &mut EvalCounters, x: &Point, f0: &ObjectiveVec, grads: &GradMatrix,
    direction: &Point, opts: &LineSearchOptions,
) -> SolveResult<f64> {
    let m = grads.nrows();
    let slopes: Vec<f64> = (0..m).map(|i| grads.row(i).dot(direction)).collect();

    let mut eta = opts.eta_init;
    for _ in 0..opts.max_shrinks {
        let trial = x + &(direction * eta);
        let f_trial = model.objectives(&trial, counters);
        let accepted = (0..m).all(|i| f_trial[i] <= f0[i] + opts.c1 * eta * slopes[i]);
        if accepted {
            return Ok(eta);
        }
        eta *= opts.gamma;
    }
    Err(SolverError::MaxIterationsExceeded { what: "line search", limit: opts.max_shrinks })
}

//! Smooth ZDT2-variant two-objective test problem.
//!
//! Purpose
//! -------
//! Provide the standard exploration benchmark: a ZDT2-style pair of
//! objectives reworked so its Pareto set is stationary without box
//! constraints. With `c = 9/(n-1)`:
//!
//! - `f1(x) = x₁²`
//! - `g(x)  = 1 + c · Σ_{j≥2} x_j²`
//! - `f2(x) = g(x) − x₁²/g(x)`
//!
//! The tail squares (instead of ZDT2's linear sum) make the tail gradient of
//! `g` vanish at zero, so the Pareto set is exactly `{x : x_j = 0, j ≥ 2}`
//! and the weighted gradient cancels there at `alpha = (1/2, 1/2)`. On the
//! front, `f2 = 1 − f1`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `n ≥ 2`; `g(x) ≥ 1 > 0` everywhere, so both objectives and all
//!   derivatives are defined on the whole of R^n.
//! - All derivatives are analytic; the Hessian-vector product is assembled
//!   directly from the closed-form second derivatives and never materializes
//!   an n×n matrix.

use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::errors::{SolveResult, SolverError};
use crate::solvers::types::{GradMatrix, ObjectiveVec, Point, Weights};
use rand::{Rng, RngCore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zdt2Variant {
    n: usize,
    scale: f64,
}

impl Zdt2Variant {
    /// Build the problem in dimension `n` (at least 2).
    pub fn new(n: usize) -> SolveResult<Self> {
        if n < 2 {
            return Err(SolverError::InvalidOption {
                name: "n",
                value: n as f64,
                reason: "the tail term needs at least one coordinate",
            });
        }
        Ok(Self { n, scale: 9.0 / (n as f64 - 1.0) })
    }

    /// `g(x) = 1 + c · Σ_{j≥2} x_j²`.
    fn tail_g(&self, x: &Point) -> f64 {
        1.0 + self.scale * x.iter().skip(1).map(|&v| v * v).sum::<f64>()
    }
}

impl ObjectiveModel for Zdt2Variant {
    fn dim(&self) -> usize {
        self.n
    }

    fn num_objectives(&self) -> usize {
        2
    }

    fn objectives(&self, x: &Point, counters: &mut EvalCounters) -> ObjectiveVec {
        counters.objective += 1;
        let g = self.tail_g(x);
        let x1sq = x[0] * x[0];
        ObjectiveVec::from(vec![x1sq, g - x1sq / g])
    }

    fn gradients(&self, x: &Point, counters: &mut EvalCounters) -> GradMatrix {
        counters.gradient += 1;
        let g = self.tail_g(x);
        let x1 = x[0];
        let mut grads = GradMatrix::zeros((2, self.n));
        grads[[0, 0]] = 2.0 * x1;
        grads[[1, 0]] = -2.0 * x1 / g;
        // d f2 / d x_j = 2 c x_j (1 + x1²/g²) for tail coordinates.
        let tail_factor = 2.0 * self.scale * (1.0 + x1 * x1 / (g * g));
        for j in 1..self.n {
            grads[[1, j]] = tail_factor * x[j];
        }
        grads
    }

    fn hessian_vec(
        &self, x: &Point, weights: &Weights, y: &Point, counters: &mut EvalCounters,
    ) -> Point {
        counters.hessian_vec += 1;
        let g = self.tail_g(x);
        let c = self.scale;
        let x1 = x[0];
        let (a1, a2) = (weights[0], weights[1]);

        // t = Σ_{j≥2} x_j y_j appears in every curvature term of f2.
        let t: f64 = x.iter().skip(1).zip(y.iter().skip(1)).map(|(&xj, &yj)| xj * yj).sum();

        let h11 = -2.0 / g;
        let cross = 4.0 * c * x1 / (g * g);
        let diag_tail = 2.0 * c * (1.0 + x1 * x1 / (g * g));
        let rank_one_tail = 8.0 * c * c * x1 * x1 / (g * g * g);

        let mut out = Point::zeros(self.n);
        // f1 contributes only d²f1/dx1² = 2.
        out[0] = a1 * 2.0 * y[0] + a2 * (h11 * y[0] + cross * t);
        for j in 1..self.n {
            out[j] = a2 * (cross * x[j] * y[0] + diag_tail * y[j] - rank_one_tail * x[j] * t);
        }
        out
    }

    fn sample_pareto(&self, rng: &mut dyn RngCore) -> Point {
        let mut x = Point::zeros(self.n);
        x[0] = rng.gen_range(0.0..1.0);
        x
    }
}

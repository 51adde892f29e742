//! Curvature-aware expansion: truncated-MINRES tangent steps.
//!
//! Purpose
//! -------
//! At a Pareto point x the manifold's tangent directions are characterized
//! through the weighted Hessian `H = Σ alpha_i ∇²f_i(x)`: a displacement v
//! that keeps the stationarity residual small satisfies `H v ≈ b` for a
//! right-hand side built from the gradients. The expander draws `b` as a
//! random combination of the gradient rows, solves `H v ≈ b` with MINRES
//! truncated to a few iterations, normalizes, and steps `x + s*v` along the
//! tangent plane (positive sign: these are tangent steps, not descent
//! steps). The truncation is deliberate: a handful of Hessian-vector
//! products here saves far more objective/gradient evaluations in the
//! optimization phase that follows.
//!
//! Edge behavior
//! -------------
//! When the truncated solve returns a numerically zero vector the
//! right-hand side lies in the null space of `H`; the normalized right-hand
//! side itself is then used as the direction (it is exactly the tangent
//! combination in that case). If the gradients themselves vanish the
//! candidate falls back to the unmoved point.

use crate::expand::{ExpandStrategy, ExpansionOptions};
use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::{
    convex::min_norm_weights,
    errors::SolveResult,
    krylov::{minres, MinresOptions},
    types::{l2_norm, Point},
    validation::validate_point,
};
use rand::{Rng, RngCore};

/// Directions shorter than this (relative to the right-hand side) are
/// treated as a null-space solve.
const NULL_SPACE_TOL: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentStepExpander {
    opts: ExpansionOptions,
    krylov: MinresOptions,
}

impl TangentStepExpander {
    pub fn new(opts: ExpansionOptions, krylov: MinresOptions) -> Self {
        Self { opts, krylov }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExpansionOptions::default(), MinresOptions::default())
    }

    pub fn options(&self) -> &ExpansionOptions {
        &self.opts
    }
}

impl ExpandStrategy for TangentStepExpander {
    fn name(&self) -> &'static str {
        "tangent"
    }

    fn expand<M: ObjectiveModel + ?Sized>(
        &self, model: &M, counters: &mut EvalCounters, rng: &mut dyn RngCore, x: &Point,
    ) -> SolveResult<Vec<Point>> {
        let n = model.dim();
        let m = model.num_objectives();
        validate_point("expansion point", x, n)?;
        let grads = model.gradients(x, counters);
        let alpha = min_norm_weights(&grads)?;

        let mut candidates = Vec::with_capacity(self.opts.fan_out);
        for _ in 0..self.opts.fan_out {
            // Random combination of the gradient rows as the right-hand side.
            let mut rhs = Point::zeros(n);
            for i in 0..m {
                let coeff: f64 = rng.gen_range(-1.0..1.0);
                rhs.scaled_add(coeff, &grads.row(i));
            }
            let rhs_norm = l2_norm(&rhs);

            let outcome = minres(
                |y| model.hessian_vec(x, &alpha, y, counters),
                &rhs,
                &self.krylov,
            );
            let mut direction = outcome.solution;
            let mut norm = l2_norm(&direction);
            if norm <= NULL_SPACE_TOL * (1.0 + rhs_norm) {
                direction = rhs;
                norm = rhs_norm;
            }
            if norm > f64::EPSILON {
                direction /= norm;
                candidates.push(x + &(direction * self.opts.step));
            } else {
                candidates.push(x.clone());
            }
        }
        Ok(candidates)
    }
}

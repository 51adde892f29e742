//! Baseline expansion: perturbed weighted-sum gradient steps.
//!
//! For each candidate, the minimum-norm weights are multiplied elementwise
//! by independent uniform noise in [0.9, 1.1], renormalized back onto the
//! simplex, and combined with the gradient rows into a direction that is
//! normalized to unit length. The candidate is one descent step `x - s*d`
//! under the perturbed trade-off. No curvature information is used, which
//! keeps expansion cheap but leaves candidates well off the manifold.

use crate::expand::{ExpandStrategy, ExpansionOptions};
use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::{
    convex::min_norm_weights,
    errors::SolveResult,
    types::{l2_norm, Point},
    validation::validate_point,
};
use rand::{Rng, RngCore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSumExpander {
    opts: ExpansionOptions,
}

impl WeightedSumExpander {
    pub fn new(opts: ExpansionOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ExpansionOptions {
        &self.opts
    }
}

impl ExpandStrategy for WeightedSumExpander {
    fn name(&self) -> &'static str {
        "weighted-sum"
    }

    fn expand<M: ObjectiveModel + ?Sized>(
        &self, model: &M, counters: &mut EvalCounters, rng: &mut dyn RngCore, x: &Point,
    ) -> SolveResult<Vec<Point>> {
        validate_point("expansion point", x, model.dim())?;
        let grads = model.gradients(x, counters);
        let alpha = min_norm_weights(&grads)?;

        let mut candidates = Vec::with_capacity(self.opts.fan_out);
        for _ in 0..self.opts.fan_out {
            let mut weights = alpha.clone();
            for w in weights.iter_mut() {
                *w *= rng.gen_range(0.9..1.1);
            }
            // Noise is bounded away from zero, so the row sum stays positive.
            let total = weights.sum();
            weights /= total;

            let mut direction = weights.dot(&grads);
            let norm = l2_norm(&direction);
            if norm > f64::EPSILON {
                direction /= norm;
                candidates.push(x - &(direction * self.opts.step));
            } else {
                // All gradients vanished; there is no trade-off to perturb.
                candidates.push(x.clone());
            }
        }
        Ok(candidates)
    }
}

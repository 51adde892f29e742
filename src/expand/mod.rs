//! expand — strategies that turn one Pareto point into K nearby candidates.
//!
//! Purpose
//! -------
//! Expansion is the exploratory half of the search: from a point already on
//! the Pareto set, produce several off-manifold candidates expected to land
//! near other parts of the front once re-optimized. Two interchangeable
//! strategies are provided:
//!
//! - [`weighted_sum::WeightedSumExpander`]: perturb the minimum-norm weights
//!   with multiplicative noise and take one gradient-descent step per
//!   perturbation. Cheap, no curvature information, so candidates sit
//!   further off the manifold and cost more optimizer iterations later.
//! - [`tangent::TangentStepExpander`]: solve for approximate tangent
//!   directions of the Pareto manifold with truncated MINRES on
//!   Hessian-vector products. Spends extra Hessian-vector products at
//!   expansion time to save many more objective/gradient evaluations during
//!   the subsequent optimization phase.
//!
//! Conventions
//! -----------
//! - Strategies draw all randomness from the injected `&mut dyn RngCore`.
//! - Every candidate list has exactly `fan_out` entries; degenerate
//!   directions fall back to the unmoved point rather than shrinking the
//!   list, keeping the driver's bookkeeping uniform.

use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::{
    errors::{SolveResult, SolverError},
    types::Point,
    validation::verify_positive,
};
use rand::RngCore;

pub mod tangent;
pub mod weighted_sum;

/// Shared knobs for both strategies.
///
/// - `fan_out`: number of candidates K produced per expansion.
/// - `step`: length s of each candidate step along its unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionOptions {
    pub fan_out: usize,
    pub step: f64,
}

impl ExpansionOptions {
    /// Construct validated options (`fan_out >= 1`, `step > 0`).
    pub fn new(fan_out: usize, step: f64) -> SolveResult<Self> {
        if fan_out == 0 {
            return Err(SolverError::InvalidOption {
                name: "fan_out",
                value: 0.0,
                reason: "must be positive",
            });
        }
        verify_positive("step", step)?;
        Ok(Self { fan_out, step })
    }
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self { fan_out: 2, step: 0.1 }
    }
}

/// An expansion strategy: produce K candidate points near a Pareto point.
pub trait ExpandStrategy {
    /// Short name used in evaluation-count reports.
    fn name(&self) -> &'static str;

    /// Expand `x` into `fan_out` candidates.
    ///
    /// # Errors
    /// Propagates failures of the convex sub-problem; shape errors for a
    /// malformed `x`.
    fn expand<M: ObjectiveModel + ?Sized>(
        &self, model: &M, counters: &mut EvalCounters, rng: &mut dyn RngCore, x: &Point,
    ) -> SolveResult<Vec<Point>>;
}

pub mod prelude {
    pub use super::tangent::TangentStepExpander;
    pub use super::weighted_sum::WeightedSumExpander;
    pub use super::{ExpandStrategy, ExpansionOptions};
}

//! model — the objective-model capability surface and bundled test problems.
//!
//! Purpose
//! -------
//! Define the fixed evaluation interface through which every solver and
//! expansion strategy consults the problem under study: objective values,
//! per-objective gradients, Hessian-vector products of the weighted
//! scalarized objective, and sampling of a point already on the Pareto set.
//!
//! Conventions
//! -----------
//! - All objectives are minimized; gradients form an m×n matrix with one row
//!   per objective.
//! - Every evaluation increments the corresponding field of the
//!   [`counters::EvalCounters`] passed by the caller; implementations must
//!   not keep counts of their own.
//! - Hessian-vector products are matrix-free: no implementation materializes
//!   an n×n matrix.
//! - Randomness for Pareto-set sampling is injected as `&mut dyn RngCore` so
//!   that experiments stay reproducible under caller-controlled seeding.

use crate::solvers::types::{GradMatrix, ObjectiveVec, Point, Weights};
use rand::RngCore;

pub mod counters;
pub mod quadratic;
pub mod zdt;

use counters::EvalCounters;

/// Evaluation interface for a smooth multi-objective problem.
///
/// Required:
/// - `dim` / `num_objectives`: the fixed problem shape (n, m).
/// - `objectives(&x, counters) -> R^m`: objective values at `x`.
/// - `gradients(&x, counters) -> R^{m×n}`: one gradient row per objective.
/// - `hessian_vec(&x, &alpha, &y, counters) -> R^n`: Hessian-vector product
///   of the alpha-weighted scalarized objective at `x`, applied to `y`.
/// - `sample_pareto(&mut rng) -> R^n`: a point on (or acceptably close to)
///   the Pareto set.
///
/// Implementations must increment exactly one counter field per call.
pub trait ObjectiveModel {
    fn dim(&self) -> usize;
    fn num_objectives(&self) -> usize;
    fn objectives(&self, x: &Point, counters: &mut EvalCounters) -> ObjectiveVec;
    fn gradients(&self, x: &Point, counters: &mut EvalCounters) -> GradMatrix;
    fn hessian_vec(
        &self, x: &Point, weights: &Weights, y: &Point, counters: &mut EvalCounters,
    ) -> Point;
    fn sample_pareto(&self, rng: &mut dyn RngCore) -> Point;
}

pub mod prelude {
    pub use super::counters::EvalCounters;
    pub use super::quadratic::QuadraticBiObjective;
    pub use super::zdt::Zdt2Variant;
    pub use super::ObjectiveModel;
}

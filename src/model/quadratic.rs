//! Convex quadratic bi-objective test problem.
//!
//! Two quadratic bowls `f_i(x) = ‖x − c_i‖²` with distinct centers. The
//! Pareto set is the segment between the centers, every point of which is
//! unconstrained Pareto-stationary, which makes this the canonical smoke
//! test for the MGDA loop: gradients are affine, the weighted Hessian is
//! `2I` everywhere, and all optimality conditions can be checked by hand.

use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::types::{GradMatrix, ObjectiveVec, Point, Weights};
use rand::{Rng, RngCore};

#[derive(Debug, Clone)]
pub struct QuadraticBiObjective {
    center_a: Point,
    center_b: Point,
}

impl QuadraticBiObjective {
    /// Build the problem from two centers of equal dimension.
    ///
    /// # Panics
    /// Panics if the centers differ in length or are empty; this is a test
    /// fixture, not a validated user surface.
    pub fn new(center_a: Point, center_b: Point) -> Self {
        assert_eq!(center_a.len(), center_b.len(), "centers must share a dimension");
        assert!(!center_a.is_empty(), "centers must be non-empty");
        Self { center_a, center_b }
    }

    fn centers(&self) -> [&Point; 2] {
        [&self.center_a, &self.center_b]
    }
}

impl ObjectiveModel for QuadraticBiObjective {
    fn dim(&self) -> usize {
        self.center_a.len()
    }

    fn num_objectives(&self) -> usize {
        2
    }

    fn objectives(&self, x: &Point, counters: &mut EvalCounters) -> ObjectiveVec {
        counters.objective += 1;
        let mut f = ObjectiveVec::zeros(2);
        for (i, center) in self.centers().iter().enumerate() {
            let diff = x - *center;
            f[i] = diff.dot(&diff);
        }
        f
    }

    fn gradients(&self, x: &Point, counters: &mut EvalCounters) -> GradMatrix {
        counters.gradient += 1;
        let n = self.dim();
        let mut grads = GradMatrix::zeros((2, n));
        for (i, center) in self.centers().iter().enumerate() {
            let row = (x - *center) * 2.0;
            grads.row_mut(i).assign(&row);
        }
        grads
    }

    fn hessian_vec(
        &self, _x: &Point, weights: &Weights, y: &Point, counters: &mut EvalCounters,
    ) -> Point {
        counters.hessian_vec += 1;
        // Each objective contributes 2I, so the weighted Hessian is
        // 2 * sum(weights) * I (with simplex weights, exactly 2I).
        y * (2.0 * weights.sum())
    }

    fn sample_pareto(&self, rng: &mut dyn RngCore) -> Point {
        let t: f64 = rng.gen_range(0.0..1.0);
        &self.center_a + &((&self.center_b - &self.center_a) * t)
    }
}

//! Property tests for the minimum-norm convex-combination solver.
//!
//! Scope
//! -----
//! - The returned weights always form a point on the probability simplex.
//! - No randomly drawn simplex trial produces a shorter combination than
//!   the returned one, up to numerical slack scaled by the gradient sizes.

use ndarray::{Array1, Array2};
use pareto_explorer::solvers::convex::min_norm_weights;
use proptest::prelude::*;

fn grad_matrix() -> impl Strategy<Value = Array2<f64>> {
    (1usize..=4, 1usize..=6).prop_flat_map(|(m, n)| {
        proptest::collection::vec(-10.0f64..10.0, m * n)
            .prop_map(move |entries| Array2::from_shape_vec((m, n), entries).unwrap())
    })
}

proptest! {
    #[test]
    fn weights_lie_on_the_simplex(grads in grad_matrix()) {
        let alpha = min_norm_weights(&grads).unwrap();
        prop_assert_eq!(alpha.len(), grads.nrows());
        prop_assert!(alpha.iter().all(|&a| a >= -1e-9), "negative weight in {}", alpha);
        prop_assert!((alpha.sum() - 1.0).abs() < 1e-9, "weights sum to {}", alpha.sum());
    }

    #[test]
    fn no_simplex_trial_beats_the_returned_combination(
        grads in grad_matrix(),
        raw in proptest::collection::vec(0.0f64..1.0, 4),
    ) {
        let m = grads.nrows();
        let alpha = min_norm_weights(&grads).unwrap();
        let best = alpha.dot(&grads);
        let best_sq = best.dot(&best);

        let total: f64 = raw[..m].iter().sum();
        prop_assume!(total > 1e-6);
        let trial = Array1::from_iter(raw[..m].iter().map(|w| w / total));
        let combo = trial.dot(&grads);
        let trial_sq = combo.dot(&combo);

        // Slack scales with the squared gradient magnitudes; the solver's
        // own optimality certificate is relative to the same scale.
        let scale = grads
            .rows()
            .into_iter()
            .map(|r| r.dot(&r))
            .fold(0.0_f64, f64::max);
        prop_assert!(
            best_sq <= trial_sq + 1e-6 * (1.0 + scale),
            "returned {} vs trial {}",
            best_sq,
            trial_sq
        );
    }
}

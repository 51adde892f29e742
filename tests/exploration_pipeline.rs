//! End-to-end exploration runs over the bundled test problems.
//!
//! Scope
//! -----
//! - Full tangent-expander pipeline on the ZDT2 variant: front growth to
//!   the target, bookkeeping consistency, and points that actually lie on
//!   the analytic front.
//! - Baseline weighted-sum pipeline for comparison: same front growth,
//!   zero Hessian-vector products.

use pareto_explorer::prelude::*;

fn tangent_driver(target_front: usize) -> ExplorationDriver<TangentStepExpander> {
    ExplorationDriver::new(
        TangentStepExpander::with_defaults(),
        ParetoOptimizer::with_defaults(),
        ExplorationOptions::new(target_front, false).unwrap(),
    )
}

#[test]
fn tangent_pipeline_traces_the_zdt_front() {
    let model = Zdt2Variant::new(10).unwrap();
    let driver = tangent_driver(10);
    let run = driver.run_seed(&model, 0);

    // The front grows by one fan-out per processed frontier point, so the
    // first size at or past 10 is 11.
    assert_eq!(run.failures, 0);
    assert_eq!(run.pareto_front.len(), 11);
    assert_eq!(run.explored.len() as u64, 2 * run.expand_calls);

    // Every collected point sits on the closed-form front f1 + f2 = 1.
    for f in &run.pareto_front {
        assert!((f[0] + f[1] - 1.0).abs() < 1e-6, "off-front point {f}");
    }

    // Tangent expansion spends Hessian-vector products, bounded by the
    // Krylov cap per candidate; optimization evaluates every candidate.
    let candidates = run.explored.len() as u64;
    assert!(run.expand_counts.hessian_vec >= candidates);
    assert!(run.expand_counts.hessian_vec <= 5 * candidates);
    assert!(run.optimize_counts.objective >= candidates);
    assert!(run.optimize_counts.gradient >= candidates);
}

#[test]
fn multiple_seeds_run_independently_and_deterministically() {
    let model = Zdt2Variant::new(6).unwrap();
    let driver = tangent_driver(6);

    let runs = driver.run(&model, &[0, 1]);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].seed, 0);
    assert_eq!(runs[1].seed, 1);
    assert_ne!(runs[0].pareto_front, runs[1].pareto_front);

    let replay = driver.run(&model, &[0, 1]);
    assert_eq!(runs, replay);
}

#[test]
fn weighted_sum_pipeline_reaches_the_target_without_curvature_evaluations() {
    let model = Zdt2Variant::new(10).unwrap();
    let driver = ExplorationDriver::new(
        WeightedSumExpander::new(ExpansionOptions::default()),
        ParetoOptimizer::with_defaults(),
        ExplorationOptions::new(10, false).unwrap(),
    );
    let run = driver.run_seed(&model, 0);

    assert!(run.pareto_front.len() >= 10);
    assert_eq!(run.expand_counts.hessian_vec, 0);
    assert_eq!(run.optimize_counts.hessian_vec, 0);
    for f in &run.pareto_front {
        assert!((f[0] + f[1] - 1.0).abs() < 1e-4, "off-front point {f}");
    }
}

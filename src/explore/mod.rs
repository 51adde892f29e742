//! explore — breadth-first expand/optimize exploration of a Pareto front.
//!
//! Purpose
//! -------
//! Given an objective model, an expansion strategy, and the MGDA optimizer,
//! grow a discrete picture of the Pareto front: sample one Pareto-optimal
//! seed point, expand it into nearby candidates, re-optimize each candidate
//! back onto the Pareto set, and keep going breadth-first from every settled
//! point until the front holds enough entries. Each seed is an independent
//! run with its own deterministic random stream.
//!
//! Key behaviors
//! -------------
//! - Phase accounting: expansion-phase and optimization-phase evaluation
//!   counts are kept in separate [`EvalCounters`], read off with
//!   `take()` at each phase boundary, so a [`SeedRun`] reports exactly where
//!   the evaluation budget went.
//! - Failure isolation: a candidate whose re-optimization fails is counted
//!   and dropped; the remaining candidates and the rest of the search are
//!   unaffected. An expansion failure drops only that frontier point.
//! - Overshoot is preserved: the target-size check runs after a frontier
//!   point has been fully processed, so the final front may exceed the
//!   target by up to one fan-out of entries.
//!
//! Conventions
//! -----------
//! - The queue holds decision-space points; `pareto_front` and `explored`
//!   hold objective-space vectors.
//! - The driver prints nothing unless `verbose` is set, in which case a
//!   per-phase table goes to stderr after each seed.

use std::collections::VecDeque;

use crate::expand::ExpandStrategy;
use crate::model::{counters::EvalCounters, ObjectiveModel};
use crate::solvers::{
    errors::{SolveResult, SolverError},
    mgda::ParetoOptimizer,
    types::ObjectiveVec,
};
use rand::{rngs::StdRng, SeedableRng};

pub mod report;

/// Configuration for one exploration run.
///
/// - `target_front`: stop once the Pareto front holds at least this many
///   points.
/// - `verbose`: print a per-phase evaluation table to stderr per seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorationOptions {
    pub target_front: usize,
    pub verbose: bool,
}

impl ExplorationOptions {
    /// Construct validated options (`target_front >= 1`).
    pub fn new(target_front: usize, verbose: bool) -> SolveResult<Self> {
        if target_front == 0 {
            return Err(SolverError::InvalidOption {
                name: "target_front",
                value: 0.0,
                reason: "must be positive",
            });
        }
        Ok(Self { target_front, verbose })
    }
}

impl Default for ExplorationOptions {
    fn default() -> Self {
        Self { target_front: 10, verbose: false }
    }
}

/// Everything one seed produced: the front, the raw explored candidates,
/// and where the evaluation budget went.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRun {
    /// RNG seed this run was driven by.
    pub seed: u64,
    /// Objective vectors of every expansion candidate, pre-optimization.
    pub explored: Vec<ObjectiveVec>,
    /// Objective vectors of the seed point and every settled candidate.
    pub pareto_front: Vec<ObjectiveVec>,
    /// Evaluations spent inside expansion calls (plus candidate scoring).
    pub expand_counts: EvalCounters,
    /// Evaluations spent re-optimizing candidates (plus seed scoring).
    pub optimize_counts: EvalCounters,
    /// Successful expansion calls.
    pub expand_calls: u64,
    /// Candidates or frontier points dropped because a solver errored.
    pub failures: u64,
}

impl SeedRun {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            explored: Vec::new(),
            pareto_front: Vec::new(),
            expand_counts: EvalCounters::new(),
            optimize_counts: EvalCounters::new(),
            expand_calls: 0,
            failures: 0,
        }
    }
}

/// Breadth-first exploration driver, generic over the expansion strategy.
#[derive(Debug, Clone)]
pub struct ExplorationDriver<E: ExpandStrategy> {
    expander: E,
    optimizer: ParetoOptimizer,
    opts: ExplorationOptions,
}

impl<E: ExpandStrategy> ExplorationDriver<E> {
    pub fn new(expander: E, optimizer: ParetoOptimizer, opts: ExplorationOptions) -> Self {
        Self { expander, optimizer, opts }
    }

    pub fn options(&self) -> &ExplorationOptions {
        &self.opts
    }

    /// Run one independent exploration per seed.
    pub fn run<M: ObjectiveModel + ?Sized>(&self, model: &M, seeds: &[u64]) -> Vec<SeedRun> {
        seeds.iter().map(|&seed| self.run_seed(model, seed)).collect()
    }

    /// Explore from one seeded Pareto point until the front reaches the
    /// target size or the frontier is exhausted.
    pub fn run_seed<M: ObjectiveModel + ?Sized>(&self, model: &M, seed: u64) -> SeedRun {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counters = EvalCounters::new();
        let mut run = SeedRun::new(seed);

        let seed_point = model.sample_pareto(&mut rng);
        let seed_objectives = model.objectives(&seed_point, &mut counters);
        run.optimize_counts.merge(&counters.take());
        run.pareto_front.push(seed_objectives);

        let mut frontier = VecDeque::new();
        frontier.push_back(seed_point);

        while let Some(point) = frontier.pop_front() {
            let candidates = match self.expander.expand(model, &mut counters, &mut rng, &point) {
                Ok(candidates) => candidates,
                Err(err) => {
                    if self.opts.verbose {
                        eprintln!("seed {seed}: expansion dropped a frontier point: {err}");
                    }
                    run.failures += 1;
                    run.expand_counts.merge(&counters.take());
                    continue;
                }
            };
            run.expand_calls += 1;
            for candidate in &candidates {
                run.explored.push(model.objectives(candidate, &mut counters));
            }
            run.expand_counts.merge(&counters.take());

            for candidate in candidates {
                match self.optimizer.optimize(model, &mut counters, candidate) {
                    Ok(settled) => {
                        let objectives = model.objectives(&settled, &mut counters);
                        run.pareto_front.push(objectives);
                        frontier.push_back(settled);
                    }
                    Err(err) => {
                        if self.opts.verbose {
                            eprintln!("seed {seed}: candidate dropped: {err}");
                        }
                        run.failures += 1;
                    }
                }
                run.optimize_counts.merge(&counters.take());
            }

            if run.pareto_front.len() >= self.opts.target_front {
                break;
            }
        }

        if self.opts.verbose {
            let rows = [
                (self.expander.name(), run.expand_counts),
                ("optimize", run.optimize_counts),
            ];
            eprintln!(
                "seed {}: {} front points, {} explored, {} failures\n{}",
                seed,
                run.pareto_front.len(),
                run.explored.len(),
                run.failures,
                report::render_phase_table(&rows),
            );
        }
        run
    }
}

pub mod prelude {
    pub use super::report::render_phase_table;
    pub use super::{ExplorationDriver, ExplorationOptions, SeedRun};
}

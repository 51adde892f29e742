//! pareto_explorer — Pareto-front exploration for smooth multi-objective problems.
//!
//! Purpose
//! -------
//! Explore the Pareto front of a smooth multi-objective problem by alternating
//! two moves: expanding a known Pareto-optimal point into nearby candidates
//! along approximate tangent directions of the Pareto manifold, and
//! re-optimizing each candidate back onto the Pareto set with a
//! multiple-gradient descent (MGDA) loop.
//!
//! Key behaviors
//! -------------
//! - Compute a common descent direction from the minimum-norm point in the
//!   convex hull of per-objective gradients (`solvers::convex`).
//! - Enforce simultaneous sufficient decrease across all objectives with a
//!   backtracking Armijo line search (`solvers::line_search`).
//! - Drive arbitrary points to Pareto stationarity (`solvers::mgda`).
//! - Approximate tangent directions via truncated matrix-free MINRES on
//!   Hessian-vector products (`solvers::krylov`, `expand::tangent`), with a
//!   cheap perturbed-weighted-sum baseline (`expand::weighted_sum`).
//! - Orchestrate breadth-first expand/optimize cycles per random seed and
//!   collect per-phase evaluation counts (`explore`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are C² in the region visited; all derivative information is
//!   analytic and supplied by an [`model::ObjectiveModel`] implementation.
//! - Every vector and matrix is an `ndarray` container over `f64`; shapes are
//!   validated at component boundaries and violations surface as
//!   [`solvers::errors::SolverError`], never as silent broadcasting.
//! - Evaluation accounting is explicit: a [`model::counters::EvalCounters`]
//!   value is passed by mutable reference into every model call site. There
//!   is no hidden process-wide counter state.
//! - Randomness is injected: expanders and Pareto-set sampling receive a
//!   `&mut dyn RngCore`, so callers control seeding and reproducibility.
//!
//! Conventions
//! -----------
//! - All objectives are minimized. A direction `d` is a common descent
//!   direction when `dot(g_i, d) <= 0` for every objective gradient `g_i`.
//! - Solver loops that could stall carry explicit iteration caps and report
//!   overruns as `SolverError::MaxIterationsExceeded` instead of looping.
//! - Core modules perform no I/O; the exploration driver may print a
//!   per-phase evaluation table when configured verbose.
//!
//! Downstream usage
//! ----------------
//! - Implement [`model::ObjectiveModel`] for your problem (or use the bundled
//!   test problems), pick an expansion strategy from [`expand`], and run
//!   [`explore::ExplorationDriver`] over a set of seeds.
//! - The individual solvers are public and usable on their own, e.g.
//!   [`solvers::convex::min_norm_weights`] or [`solvers::krylov::minres`].

pub mod expand;
pub mod explore;
pub mod model;
pub mod solvers;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use pareto_explorer::prelude::*;
//
// to import the main exploration surface in a single line.

pub mod prelude {
    pub use crate::expand::prelude::*;
    pub use crate::explore::prelude::*;
    pub use crate::model::prelude::*;
    pub use crate::solvers::prelude::*;
}

//! solvers — the numerical core: direction finding, line search, MGDA, MINRES.
//!
//! Purpose
//! -------
//! Bundle the optimization machinery that everything else builds on: the
//! convex sub-problem that produces a minimum-norm convex combination of
//! per-objective gradients, the multi-objective Armijo backtracking line
//! search, the MGDA loop that drives points onto the Pareto set, and the
//! matrix-free MINRES solver used to approximate tangent directions.
//!
//! Key behaviors
//! -------------
//! - [`convex::min_norm_weights`] solves the simplex-constrained quadratic
//!   program to global optimality or fails loudly.
//! - [`line_search::backtracking_search`] shrinks a trial step until the
//!   Armijo condition holds for every objective simultaneously.
//! - [`mgda::ParetoOptimizer`] combines both into the descent loop with dual
//!   stationarity/stall termination.
//! - [`krylov::minres`] runs a fixed small number of Lanczos/Givens steps on
//!   a symmetric operator given only through its action on a vector; partial
//!   convergence is expected and accepted.
//!
//! Conventions
//! -----------
//! - Fallible entrypoints return [`errors::SolveResult<T>`]; callers never
//!   see panics for malformed inputs, only [`errors::SolverError`] values.
//! - Shared shape and option checks live in [`validation`], keeping error
//!   reporting uniform across the solver surface.

pub mod convex;
pub mod errors;
pub mod krylov;
pub mod line_search;
pub mod mgda;
pub mod types;
pub mod validation;

pub mod prelude {
    pub use super::convex::min_norm_weights;
    pub use super::errors::{SolveResult, SolverError};
    pub use super::krylov::{minres, MinresOptions, MinresOutcome};
    pub use super::line_search::{backtracking_search, LineSearchOptions};
    pub use super::mgda::{OptimizerOptions, ParetoOptimizer};
    pub use super::types::{GradMatrix, ObjectiveVec, Point, Weights};
}

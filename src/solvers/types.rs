//! solvers::types — shared numeric aliases and default constants.
//!
//! Centralizing these aliases keeps the rest of the crate agnostic to the
//! `ndarray` generics and gives every component the same vocabulary: points
//! live in R^n, objective vectors in R^m, gradients form an m×n matrix with
//! one row per objective, and combination weights lie on the probability
//! simplex in R^m.

use ndarray::{Array1, Array2};

/// Decision-variable vector `x` in R^n.
pub type Point = Array1<f64>;

/// Objective values `f(x)` in R^m.
pub type ObjectiveVec = Array1<f64>;

/// Gradient matrix with one row per objective: m×n.
pub type GradMatrix = Array2<f64>;

/// Convex-combination weights `alpha` on the probability simplex in R^m.
pub type Weights = Array1<f64>;

/// Convergence threshold shared by the stationarity and stall checks.
pub const DEFAULT_TOL: f64 = 1e-5;

/// Armijo sufficient-decrease constant.
pub const DEFAULT_C1: f64 = 1e-4;

/// Geometric decay factor for the backtracking line search.
pub const DEFAULT_DECAY: f64 = 0.5;

/// Cap on backtracking shrinks. At `0.5^60` the step has fallen to ~1e-18 of
/// its initial value, below any scale where the Armijo test is meaningful.
pub const DEFAULT_MAX_SHRINKS: usize = 60;

/// Cap on MGDA iterations.
pub const DEFAULT_MAX_ITERS: usize = 500;

/// Default MINRES truncation for tangent solves. Deliberately small: the
/// expander trades solver accuracy for fewer Hessian-vector products.
pub const DEFAULT_KRYLOV_ITERS: usize = 5;

/// Euclidean norm of a vector.
pub fn l2_norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

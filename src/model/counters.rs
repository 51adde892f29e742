//! Explicit evaluation accounting for objective-model calls.
//!
//! The counters are an ordinary value passed by mutable reference into every
//! model call site, scoped to one phase through a reset-and-read pair. They
//! are never ambient process state, so tests and the driver can account for
//! exactly the evaluations a phase performed.

/// Counts of objective, gradient, and Hessian-vector-product evaluations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalCounters {
    /// Objective-vector evaluations `f(x)`.
    pub objective: u64,
    /// Gradient-matrix evaluations `grad(x)`.
    pub gradient: u64,
    /// Hessian-vector products `hvp(x, alpha, y)`.
    pub hessian_vec: u64,
}

impl EvalCounters {
    /// Fresh counters with all counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counts to zero, starting a new phase.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add another counter's totals into this one.
    pub fn merge(&mut self, other: &EvalCounters) {
        self.objective += other.objective;
        self.gradient += other.gradient;
        self.hessian_vec += other.hessian_vec;
    }

    /// Read the current counts and reset to zero, ending a phase.
    pub fn take(&mut self) -> EvalCounters {
        std::mem::take(self)
    }

    /// Total evaluations across all three kinds.
    pub fn total(&self) -> u64 {
        self.objective + self.gradient + self.hessian_vec
    }
}

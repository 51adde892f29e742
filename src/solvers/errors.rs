//! Unified error surface for the solver stack.
//!
//! Every fallible solver operation reports one of these variants. Errors are
//! local to a single point's processing: the exploration driver isolates a
//! failing candidate and continues the run.

/// Crate-wide result alias for solver operations.
pub type SolveResult<T> = Result<T, SolverError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    // ---- Shapes ----
    /// A vector or matrix input violates its declared dimension.
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A numeric input contains NaN or an infinity.
    NonFiniteValue {
        what: &'static str,
        index: usize,
        value: f64,
    },

    // ---- Convex sub-problem ----
    /// The simplex-constrained quadratic program failed to reach optimality.
    /// Fatal for the current expand/optimize call.
    SolverFailure {
        reason: String,
    },

    // ---- Descent invariant ----
    /// A computed direction ascends some objective beyond tolerance. This
    /// signals an internal inconsistency, not a recoverable condition.
    DescentInvariantViolation {
        objective: usize,
        dot: f64,
        tol: f64,
    },

    // ---- Hardened loop caps ----
    /// A loop that the base algorithm leaves unbounded hit its safety cap.
    MaxIterationsExceeded {
        what: &'static str,
        limit: usize,
    },

    // ---- Configuration ----
    /// A numeric option is out of its documented range.
    InvalidOption {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl std::error::Error for SolverError {}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::ShapeMismatch { what, expected, found } => {
                write!(f, "Shape mismatch for {what}: expected {expected}, found {found}")
            }
            SolverError::NonFiniteValue { what, index, value } => {
                write!(f, "Non-finite value in {what} at index {index}: {value}")
            }
            SolverError::SolverFailure { reason } => {
                write!(f, "Convex combination solver failed: {reason}")
            }
            SolverError::DescentInvariantViolation { objective, dot, tol } => {
                write!(
                    f,
                    "Descent invariant violated for objective {objective}: \
                     dot(grad, d) = {dot} exceeds tolerance {tol}"
                )
            }
            SolverError::MaxIterationsExceeded { what, limit } => {
                write!(f, "Maximum iterations exceeded in {what}: limit {limit}")
            }
            SolverError::InvalidOption { name, value, reason } => {
                write!(f, "Invalid option {name} = {value}: {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_fields() {
        let err = SolverError::ShapeMismatch { what: "gradient rows", expected: 2, found: 3 };
        let text = err.to_string();
        assert!(text.contains("gradient rows"));
        assert!(text.contains('2'));
        assert!(text.contains('3'));

        let err = SolverError::MaxIterationsExceeded { what: "line search", limit: 60 };
        assert!(err.to_string().contains("line search"));
    }
}

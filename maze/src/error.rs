//! Errors raised by the frontier and the solver.
//!
//! Loading and configuration failures are reported through `anyhow` instead;
//! these are the two outcomes a caller of the search may want to match on.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// `remove` was called on an empty frontier. Callers check `is_empty`
    /// first, so seeing this means a bug in the caller.
    EmptyFrontier,
    /// The frontier ran dry before the exit was reached.
    NoSolution { explored: usize },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "empty frontier"),
            Self::NoSolution { explored } => {
                write!(f, "no solution (states explored: {explored})")
            }
        }
    }
}

impl std::error::Error for SolveError {}

//! Error types.

use thiserror::Error;

/// Input validation errors surfaced by [`SaRunner::run`](crate::sa::SaRunner::run).
///
/// All of these are caller mistakes caught before any search work starts;
/// nothing inside the annealing loop can fail. Coincident-point infinities
/// are expected values the search prices out, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Fewer than two points were supplied. A tour needs at least two
    /// points to have a meaningful distance.
    #[error("a tour needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// The initial temperature was zero, negative, or not a number.
    #[error("initial temperature must be positive, got {0}")]
    InvalidTemperature(f64),

    /// The cooling factor fell outside the open interval (0, 1).
    #[error("cooling factor must be in (0, 1), got {0}")]
    InvalidCoolingFactor(f64),
}

//! Approximate Traveling Salesman solving via Simulated Annealing.
//!
//! Given a set of 2D points, the solver searches for a closed tour that
//! visits every point exactly once and returns to its start, minimizing
//! total Euclidean travel distance. The crate is a pure computational
//! library: it consumes points and a temperature schedule, and produces
//! the best tour found plus a per-iteration trace of proposed candidate
//! distances for external visualization. Point generation, plotting, and
//! reporting belong to the caller.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::point::Point;
//! use tsp_anneal::sa::{InverseSquare, SaConfig, SaRunner};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//!
//! let config = SaConfig::default().with_iterations(200).with_seed(42);
//! let result = SaRunner::run(&points, &InverseSquare::default(), &config)?;
//!
//! assert!(result.best.total_distance() <= 4.05);
//! assert_eq!(result.trace.len(), 200);
//! # Ok::<(), tsp_anneal::error::SolverError>(())
//! ```
//!
//! # Design
//!
//! - [`point`]: 2D points and Euclidean distance, with coincident points
//!   priced at infinity so zero-length edges never look cheap.
//! - [`tour`]: immutable closed tours with eagerly computed total distance;
//!   deriving a modified tour builds a new value, so the solver's current
//!   and candidate tours never alias.
//! - [`sa`]: the annealing loop, its configuration, and the fitness-space
//!   acceptance model.
//! - [`error`]: input validation errors, surfaced before any search work.
//!
//! Runs are single-threaded and, given a seed, bit-for-bit reproducible.

pub mod error;
pub mod point;
pub mod sa;
pub mod tour;

//! Closed tours over a point set.

use crate::point::{distance, Point};

/// A closed tour visiting every point in its sequence exactly once.
///
/// The closed path has N+1 entries with `path()[0] == path()[N]`, and the
/// total distance is summed eagerly at construction, so every `Tour` value
/// is usable immediately with no call-order dependencies.
///
/// Tours are immutable: "modifying" one means deriving a fresh value via
/// [`Tour::with_swapped`]. The solver compares current and candidate tours
/// each iteration, so shared mutable state between them would corrupt the
/// comparison.
#[derive(Debug, Clone)]
pub struct Tour {
    points: Vec<Point>,
    path: Vec<Point>,
    total_distance: f64,
}

impl Tour {
    /// Builds a closed tour from an ordered point sequence.
    ///
    /// The first element is the fixed start/end anchor: the remaining
    /// elements follow in the given order and the anchor is re-appended to
    /// close the loop.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty. [`SaRunner::run`](crate::sa::SaRunner::run)
    /// rejects undersized inputs before any tour is built.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(!points.is_empty(), "a tour needs at least one point");

        let mut path = Vec::with_capacity(points.len() + 1);
        path.extend_from_slice(&points);
        path.push(points[0]);

        let total_distance = path.windows(2).map(|w| distance(w[0], w[1])).sum();

        Self {
            points,
            path,
            total_distance,
        }
    }

    /// Derives a new tour with the points at positions `i` and `j`
    /// exchanged. `i == j` yields a tour equal to this one.
    pub fn with_swapped(&self, i: usize, j: usize) -> Self {
        let mut points = self.points.clone();
        points.swap(i, j);
        Self::new(points)
    }

    /// The point sequence the tour was built from (N points, pre-closure).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The closed path (N+1 points, first and last identical).
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Sum of consecutive edge lengths, including the closing edge.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of distinct stops (excluding the closing duplicate).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the tour has no stops. Unreachable through [`Tour::new`],
    /// which rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

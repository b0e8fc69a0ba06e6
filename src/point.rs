//! Geometric primitives: 2D points and the edge distance function.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D location visited by a tour.
///
/// Plain value type with no identity beyond its coordinates. Duplicate
/// coordinates are permitted in an input set; the edge between two
/// coincident points is infinite (see [`distance`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
///
/// Coincident points yield `f64::INFINITY` rather than 0: a zero-length
/// edge would make a tour artificially cheap, so it is priced out of the
/// search instead of being excluded by a separate rule. Pure and total
/// over all finite inputs.
///
/// # Examples
///
/// ```
/// use tsp_anneal::point::{distance, Point};
///
/// let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
///
/// let p = Point::new(2.0, 2.0);
/// assert_eq!(distance(p, p), f64::INFINITY);
/// ```
pub fn distance(p1: Point, p2: Point) -> f64 {
    let d = ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt();
    if d == 0.0 {
        f64::INFINITY
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_three_four_five() {
        let d = distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_unit_axis() {
        let d = distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_points_are_infinitely_far() {
        let p = Point::new(7.5, -3.25);
        assert_eq!(distance(p, p), f64::INFINITY);
        assert_eq!(distance(p, Point::new(7.5, -3.25)), f64::INFINITY);
    }

    proptest! {
        #[test]
        fn prop_distance_non_negative(
            x1 in -1e6..1e6f64, y1 in -1e6..1e6f64,
            x2 in -1e6..1e6f64, y2 in -1e6..1e6f64,
        ) {
            let d = distance(Point::new(x1, y1), Point::new(x2, y2));
            prop_assert!(d >= 0.0);
        }

        #[test]
        fn prop_distance_symmetric(
            x1 in -1e6..1e6f64, y1 in -1e6..1e6f64,
            x2 in -1e6..1e6f64, y2 in -1e6..1e6f64,
        ) {
            let a = Point::new(x1, y1);
            let b = Point::new(x2, y2);
            prop_assert_eq!(distance(a, b), distance(b, a));
        }

        #[test]
        fn prop_distance_infinite_iff_coincident(
            x1 in -1e3..1e3f64, y1 in -1e3..1e3f64,
            x2 in -1e3..1e3f64, y2 in -1e3..1e3f64,
        ) {
            let a = Point::new(x1, y1);
            let b = Point::new(x2, y2);
            let d = distance(a, b);
            prop_assert_eq!(d.is_infinite(), a == b);
        }
    }
}

//! Closed contours (polygon rings).
//!
//! The last point of a [`ClosedContour`] is connected back to the first one implicitly, so the first point is
//! never duplicated at the end of the point list. Use [`ClosedContour::iter_points_closing`] when a consumer
//! needs the explicit closing vertex.

use serde::{Deserialize, Serialize};

/// Closed sequence of points.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct ClosedContour<Point> {
    /// Points of the contour.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the vertices without repeating the first one.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Iterates over the vertices and repeats the first one at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().chain(self.points.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_iterator_repeats_first_point() {
        let contour = ClosedContour::new(vec![1, 2, 3, 4]);
        assert_eq!(contour.iter_points().count(), 4);
        assert_eq!(
            contour.iter_points_closing().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 1]
        );
    }

    #[test]
    fn empty_contour_has_no_closing_point() {
        let contour = ClosedContour::<i32>::default();
        assert_eq!(contour.iter_points_closing().count(), 0);
    }
}

use crate::cartesian::CartesianPoint2d;
use crate::geo::Projection;
use serde::{Deserialize, Serialize};

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Segment<Point>(pub Point, pub Point);

impl<Point> Segment<Point> {
    /// Creates a segment from `start` to `end`.
    pub fn new(start: Point, end: Point) -> Self {
        Self(start, end)
    }

    /// First point of the segment.
    pub fn start(&self) -> &Point {
        &self.0
    }

    /// Last point of the segment.
    pub fn end(&self) -> &Point {
        &self.1
    }

    /// Projects both ends of the segment.
    pub fn project<P, Proj>(&self, projection: &Proj) -> Option<Segment<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        Some(Segment(projection.project(&self.0)?, projection.project(&self.1)?))
    }
}

impl<P: CartesianPoint2d> Segment<P> {
    /// Euclidean length of the segment.
    pub fn length(&self) -> P::Num {
        self.0.distance(&self.1)
    }
}

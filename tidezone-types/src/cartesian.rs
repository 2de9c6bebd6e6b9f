//! Points in the cartesian coordinates of a chart.

use nalgebra::{Point2, Scalar, Vector2};
use num_traits::Float;

/// Point in the native (projected) coordinates of a chart.
pub type Point2d = Point2<f64>;

/// A point on a 2d plane.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Float + Scalar;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Vector from `other` to this point.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between two points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }

    /// Euclidean distance between two points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        self.distance_sq(other).sqrt()
    }
}

/// Cartesian point that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

impl<Num: Float + Scalar> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: Float + Scalar> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}

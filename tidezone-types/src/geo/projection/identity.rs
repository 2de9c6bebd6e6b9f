use crate::cartesian::NewCartesianPoint2d;
use crate::geo::point::NewGeoPoint;
use crate::geo::projection::Projection;
use std::marker::PhantomData;

/// Plate carrée view of geographic coordinates: `x` is longitude, `y` is latitude, both in degrees. Used for
/// charts that are already georeferenced in EPSG:4326.
#[derive(Debug, Clone, Copy)]
pub struct IdentityProjection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> IdentityProjection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for IdentityProjection<In, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for IdentityProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let (x, y) = (input.lon(), input.lat());
        (x.is_finite() && y.is_finite()).then(|| Out::new(x, y))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let (lon, lat) = (input.x(), input.y());
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then(|| In::latlon(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::GeoPoint2d;
    use crate::latlon;

    #[test]
    fn unproject_swaps_axes() {
        let projection = IdentityProjection::<GeoPoint2d, Point2d>::new();
        assert_eq!(
            projection.unproject(&Point2d::new(-43.0, -23.0)),
            Some(latlon!(-23.0, -43.0))
        );
        assert_eq!(
            projection.unproject(&Point2d::new(180.0, -90.0)),
            Some(latlon!(-90.0, 180.0))
        );
    }

    #[test]
    fn unproject_outside_valid_range() {
        let projection = IdentityProjection::<GeoPoint2d, Point2d>::new();
        for point in [
            Point2d::new(10.0, 120.0),
            Point2d::new(10.0, -90.5),
            Point2d::new(180.5, 0.0),
            Point2d::new(-200.0, 0.0),
            Point2d::new(f64::NAN, 0.0),
            Point2d::new(0.0, f64::INFINITY),
        ] {
            assert_eq!(projection.unproject(&point), None, "{point:?}");
        }
    }
}

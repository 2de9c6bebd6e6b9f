use crate::cartesian::NewCartesianPoint2d;
use crate::geo::point::NewGeoPoint;
use crate::geo::projection::Projection;
use geodesy::prelude::*;
use std::marker::PhantomData;

/// Projection backed by an operator of the `geodesy` crate, e.g. `utm zone=23 south ellps=WGS84`.
pub struct GeodesyProjection<In, Out> {
    context: Minimal,
    op: OpHandle,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Parses the operator definition. Returns `None` if `geodesy` does not understand it.
    pub fn new(definition: &str) -> Option<Self> {
        let mut context = Minimal::new();
        let op = context.op(definition).ok()?;
        Some(Self {
            context,
            op,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for GeodesyProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let mut data = [Coor2D::geo(input.lat(), input.lon())];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
            return None;
        }

        Some(Out::new(data[0].0[0], data[0].0[1]))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        let (lon, lat) = (data[0].0[0].to_degrees(), data[0].0[1].to_degrees());
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }

        Some(In::latlon(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::GeoPoint2d;
    use crate::latlon;
    use approx::assert_abs_diff_eq;

    #[test]
    fn utm_round_trip() {
        let projection = GeodesyProjection::<GeoPoint2d, Point2d>::new("utm zone=23 south ellps=WGS84")
            .expect("valid definition");
        let station = latlon!(-23.0, -43.0);

        let projected = projection.project(&station).expect("projectable");
        let back = projection.unproject(&projected).expect("unprojectable");

        assert_abs_diff_eq!(back, station, epsilon = 1e-7);
    }

    #[test]
    fn unknown_operator() {
        assert!(GeodesyProjection::<GeoPoint2d, Point2d>::new("no_such_operator").is_none());
    }
}

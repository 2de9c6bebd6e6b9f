//! Direct and inverse geodesic problems on the WGS84 ellipsoid.

use crate::error::TideZoneError;
use geo::{GeodesicBearing, GeodesicDestination, Point};
use tidezone_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

/// Distance (meters) under which two points are considered to be the same point.
pub const COINCIDENCE_EPSILON: f64 = 1e-3;

/// Solution of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicLine {
    /// Azimuth at the first point towards the second one, degrees clockwise from north in `[0, 360)`.
    pub azimuth_forward: f64,
    /// Azimuth at the second point back towards the first one, degrees in `[0, 360)`.
    pub azimuth_reverse: f64,
    /// Length of the geodesic in meters.
    pub distance: f64,
}

/// Solves geodesic problems on the WGS84 ellipsoid with Karney's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeodesicSolver;

impl GeodesicSolver {
    /// Solver on the WGS84 ellipsoid.
    pub fn wgs84() -> Self {
        Self
    }

    /// Finds the azimuths and the length of the geodesic between two points.
    ///
    /// Fails with [`TideZoneError::DegenerateBaseline`] if the points are closer than [`COINCIDENCE_EPSILON`],
    /// since the azimuth is undefined then.
    pub fn inverse(
        &self,
        from: &impl GeoPoint<Num = f64>,
        to: &impl GeoPoint<Num = f64>,
    ) -> Result<GeodesicLine, TideZoneError> {
        let from = to_geo(from);
        let to = to_geo(to);

        let (azimuth, distance) = from.geodesic_bearing_distance(to);
        if distance.is_nan() || distance < COINCIDENCE_EPSILON {
            return Err(TideZoneError::DegenerateBaseline);
        }

        Ok(GeodesicLine {
            azimuth_forward: normalize_azimuth(azimuth),
            azimuth_reverse: normalize_azimuth(to.geodesic_bearing(from)),
            distance,
        })
    }

    /// Finds the point at `distance` meters from `from` along the geodesic leaving it at `azimuth` degrees.
    ///
    /// Any azimuth is accepted and normalized to `[0, 360)`. The returned longitude is normalized to
    /// `[-180, 180)`.
    pub fn forward(&self, from: &impl GeoPoint<Num = f64>, azimuth: f64, distance: f64) -> GeoPoint2d {
        let reached = to_geo(from).geodesic_destination(normalize_azimuth(azimuth), distance);
        GeoPoint2d::latlon(reached.y(), normalize_lon(reached.x()))
    }
}

fn to_geo(point: &impl GeoPoint<Num = f64>) -> Point<f64> {
    Point::new(point.lon(), point.lat())
}

/// Normalizes an azimuth in degrees to `[0, 360)`.
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    let normalized = azimuth.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use tidezone_types::latlon;

    #[test]
    fn inverse_due_south() {
        let solver = GeodesicSolver::wgs84();
        let line = solver
            .inverse(&latlon!(-23.0, -43.0), &latlon!(-23.01, -43.0))
            .expect("valid baseline");

        assert_abs_diff_eq!(line.azimuth_forward, 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line.azimuth_reverse, 0.0, epsilon = 1e-9);
        // one hundredth of a degree of latitude at 23°S
        assert_abs_diff_eq!(line.distance, 1107.44, epsilon = 0.01);
    }

    #[test]
    fn inverse_known_distance() {
        // Flinders Peak to Buninyong, Vincenty (1975)
        let solver = GeodesicSolver::wgs84();
        let from = latlon!(-(37.0 + 57.0 / 60.0 + 3.72030 / 3600.0), 144.0 + 25.0 / 60.0 + 29.52440 / 3600.0);
        let to = latlon!(-(37.0 + 39.0 / 60.0 + 10.15610 / 3600.0), 143.0 + 55.0 / 60.0 + 35.38390 / 3600.0);
        let line = solver.inverse(&from, &to).expect("valid line");

        assert_abs_diff_eq!(line.distance, 54_972.271, epsilon = 0.01);
        assert_abs_diff_eq!(line.azimuth_forward, 306.0 + 52.0 / 60.0 + 5.37 / 3600.0, epsilon = 1e-4);
        assert_abs_diff_eq!(line.azimuth_reverse, 127.0 + 10.0 / 60.0 + 25.07 / 3600.0, epsilon = 1e-4);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let solver = GeodesicSolver::wgs84();
        let station = latlon!(-23.0, -43.0);

        assert_matches!(solver.inverse(&station, &station), Err(TideZoneError::DegenerateBaseline));
        assert_matches!(
            solver.inverse(&station, &latlon!(-23.0 + 1e-12, -43.0)),
            Err(TideZoneError::DegenerateBaseline)
        );
    }

    #[test]
    fn nearly_antipodal_points() {
        let solver = GeodesicSolver::wgs84();
        let line = solver
            .inverse(&latlon!(0.0, 0.0), &latlon!(0.5, 179.7))
            .expect("antipodal points have a geodesic");

        assert_abs_diff_eq!(line.azimuth_forward, 15.5569, epsilon = 1e-3);
        assert_abs_diff_eq!(line.distance, 19_944_127.42, epsilon = 0.1);
    }

    #[test]
    fn forward_zero_distance_is_identity() {
        let solver = GeodesicSolver::wgs84();
        let station = latlon!(-23.0, -43.0);

        for azimuth in [0.0, 90.0, 180.0, 270.0, 359.9] {
            assert_abs_diff_eq!(solver.forward(&station, azimuth, 0.0), station, epsilon = 1e-12);
        }
    }

    #[test]
    fn forward_normalizes_azimuth() {
        let solver = GeodesicSolver::wgs84();
        let station = latlon!(-23.0, -43.0);

        assert_abs_diff_eq!(
            solver.forward(&station, 450.0, 926.0),
            solver.forward(&station, 90.0, 926.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            solver.forward(&station, -90.0, 926.0),
            solver.forward(&station, 270.0, 926.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn forward_wraps_longitude() {
        let solver = GeodesicSolver::wgs84();
        let point = solver.forward(&latlon!(0.0, 179.99), 90.0, 5_000.0);

        assert!(point.lon() < -179.9, "{}", point.lon());
    }

    #[test]
    fn inverse_then_forward_round_trip() {
        let solver = GeodesicSolver::wgs84();
        let pairs = [
            (latlon!(-23.0, -43.0), latlon!(-23.01, -43.0)),
            (latlon!(-22.9, -43.2), latlon!(-23.1, -42.9)),
            (latlon!(51.5, -0.1), latlon!(51.3, 0.2)),
            (latlon!(10.0, 179.9), latlon!(10.1, -179.8)),
            (latlon!(0.0, 0.0), latlon!(0.0, 0.3)),
            (latlon!(60.0, 5.0), latlon!(60.0, 5.0001)),
            (latlon!(-23.0, -43.0), latlon!(-22.55, -43.0)),
            (latlon!(-23.0, -43.0), latlon!(-23.3, -42.6)),
            (latlon!(40.0, -70.0), latlon!(41.2, -68.5)),
        ];

        for (from, to) in pairs {
            let line = solver.inverse(&from, &to).expect("valid line");
            let reached = solver.forward(&from, line.azimuth_forward, line.distance);
            assert_abs_diff_eq!(reached, to, epsilon = 1e-8);
        }
    }

    #[test]
    fn azimuth_close_to_north() {
        let solver = GeodesicSolver::wgs84();
        let from = latlon!(-23.0, -43.0);

        for azimuth in [359.999, 0.001, 360.0 - 1e-9] {
            let to = solver.forward(&from, azimuth, 50_000.0);
            let line = solver.inverse(&from, &to).expect("valid line");

            // the difference is measured across north
            let diff = (line.azimuth_forward - normalize_azimuth(azimuth) + 180.0).rem_euclid(360.0) - 180.0;
            assert_abs_diff_eq!(diff, 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(line.distance, 50_000.0, epsilon = 1e-6);
            assert!((0.0..360.0).contains(&line.azimuth_forward));
        }
    }
}

use crate::dms::{lat_to_dms, lon_to_dms};
use crate::error::TideZoneError;
use crate::geodesic::{GeodesicLine, GeodesicSolver};
use tidezone_types::geo::{GeoPoint, GeoPoint2d};

/// Reference line between two stations.
///
/// The azimuths and the length are solved once, when the baseline is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    station_a: GeoPoint2d,
    station_b: GeoPoint2d,
    line: GeodesicLine,
}

impl Baseline {
    /// Creates a baseline from `station_a` to `station_b`.
    ///
    /// Fails with [`TideZoneError::InvalidStation`] if a station is outside `[-90, 90]` latitude or
    /// `[-180, 180]` longitude, and with [`TideZoneError::DegenerateBaseline`] if the stations coincide.
    pub fn new(
        solver: &GeodesicSolver,
        station_a: GeoPoint2d,
        station_b: GeoPoint2d,
    ) -> Result<Self, TideZoneError> {
        if let Some(station) = [station_a, station_b].into_iter().find(|s| !s.is_valid()) {
            return Err(TideZoneError::InvalidStation(station));
        }

        let line = solver.inverse(&station_a, &station_b)?;
        Ok(Self {
            station_a,
            station_b,
            line,
        })
    }

    /// First station.
    pub fn station_a(&self) -> GeoPoint2d {
        self.station_a
    }

    /// Second station.
    pub fn station_b(&self) -> GeoPoint2d {
        self.station_b
    }

    /// Azimuth from station A towards station B, degrees in `[0, 360)`.
    pub fn azimuth(&self) -> f64 {
        self.line.azimuth_forward
    }

    /// Azimuth from station B back towards station A, degrees in `[0, 360)`.
    pub fn reverse_azimuth(&self) -> f64 {
        self.line.azimuth_reverse
    }

    /// Geodesic length of the baseline in meters.
    pub fn distance(&self) -> f64 {
        self.line.distance
    }

    pub(crate) fn log_summary(&self) {
        log::info!(
            "Baseline: station 1 {}, {}; station 2 {}, {}; azimuth {:.4}°, length {:.2} m",
            lat_to_dms(self.station_a.lat()),
            lon_to_dms(self.station_a.lon()),
            lat_to_dms(self.station_b.lat()),
            lon_to_dms(self.station_b.lon()),
            self.azimuth(),
            self.distance(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use tidezone_types::latlon;

    #[test]
    fn stations_outside_valid_range() {
        let solver = GeodesicSolver::wgs84();
        for (a, b) in [
            (latlon!(95.0, 10.0), latlon!(95.01, 10.0)),
            (latlon!(10.0, 10.0), latlon!(-90.5, 10.0)),
            (latlon!(10.0, 181.0), latlon!(10.0, 10.0)),
            (latlon!(f64::NAN, 10.0), latlon!(10.0, 10.0)),
        ] {
            assert_matches!(Baseline::new(&solver, a, b), Err(TideZoneError::InvalidStation(_)));
        }
    }

    #[test]
    fn invalid_station_is_reported() {
        let result = Baseline::new(&GeodesicSolver::wgs84(), latlon!(0.0, 0.0), latlon!(0.0, -190.0));
        assert_matches!(result, Err(TideZoneError::InvalidStation(station)) => {
            assert_eq!(station, latlon!(0.0, -190.0));
        });
    }

    #[test]
    fn stations_on_range_limits() {
        let baseline = Baseline::new(&GeodesicSolver::wgs84(), latlon!(89.99, 180.0), latlon!(90.0, -180.0))
            .expect("valid stations");
        // a hundredth of a degree of latitude this close to the pole
        assert_abs_diff_eq!(baseline.distance(), 1116.9, epsilon = 0.5);
    }
}

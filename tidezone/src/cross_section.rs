//! Perpendicular lines along a baseline.

use crate::baseline::Baseline;
use crate::config::ZoneConfig;
use crate::error::TideZoneError;
use crate::geodesic::{normalize_azimuth, GeodesicSolver};
use tidezone_types::geo::GeoPoint2d;
use tidezone_types::Segment;

/// Perpendicular segment centered on a point of the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    index: usize,
    midpoint: GeoPoint2d,
    endpoint_a: GeoPoint2d,
    endpoint_b: GeoPoint2d,
}

impl CrossSection {
    /// Position of the cross-section along the baseline, `0..=num_lines`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Point on the baseline.
    pub fn midpoint(&self) -> GeoPoint2d {
        self.midpoint
    }

    /// End at the perpendicular azimuth (baseline azimuth + 90°).
    pub fn endpoint_a(&self) -> GeoPoint2d {
        self.endpoint_a
    }

    /// End at the opposite side (baseline azimuth + 270°).
    pub fn endpoint_b(&self) -> GeoPoint2d {
        self.endpoint_b
    }

    /// The cross-section as a segment from A to B.
    pub fn segment(&self) -> Segment<GeoPoint2d> {
        Segment(self.endpoint_a, self.endpoint_b)
    }
}

/// Generates the cross-sections of a baseline.
///
/// For `num_lines = N` the builder places `N + 1` cross-sections at the fractions `0, 1/N, ..., 1` of the
/// baseline length, so the first one goes through station A and the last one through station B.
#[derive(Debug, Clone, Copy)]
pub struct CrossSectionBuilder {
    solver: GeodesicSolver,
    num_lines: usize,
    length_nm: f64,
}

impl CrossSectionBuilder {
    /// Creates a builder with the WGS84 solver.
    pub fn new(num_lines: usize, length_nm: f64) -> Self {
        Self {
            solver: GeodesicSolver::wgs84(),
            num_lines,
            length_nm,
        }
    }

    /// Creates a builder from a configuration.
    pub fn from_config(config: &ZoneConfig) -> Self {
        Self::new(config.num_lines, config.length_nm)
    }

    /// Replaces the geodesic solver.
    pub fn with_solver(mut self, solver: GeodesicSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Builds `num_lines + 1` cross-sections in increasing index order.
    ///
    /// The configuration is validated before any geodesic computation.
    pub fn build(&self, baseline: &Baseline) -> Result<Vec<CrossSection>, TideZoneError> {
        let config = ZoneConfig::new(self.num_lines, self.length_nm);
        config.validate()?;

        let half_length = config.half_length_m();
        let azimuth = baseline.azimuth();
        let perpendicular = normalize_azimuth(azimuth + 90.0);
        let opposite = normalize_azimuth(perpendicular + 180.0);

        let station_a = baseline.station_a();
        let sections = (0..=self.num_lines)
            .map(|index| {
                let fraction = index as f64 / self.num_lines as f64;
                let midpoint = self
                    .solver
                    .forward(&station_a, azimuth, baseline.distance() * fraction);
                let endpoint_a = self.solver.forward(&midpoint, perpendicular, half_length);
                let endpoint_b = self.solver.forward(&midpoint, opposite, half_length);

                log::debug!(
                    "Cross-section {index}: midpoint {midpoint:?}, A {endpoint_a:?}, B {endpoint_b:?}"
                );

                CrossSection {
                    index,
                    midpoint,
                    endpoint_a,
                    endpoint_b,
                }
            })
            .collect();

        Ok(sections)
    }
}

//! Zones between consecutive cross-sections.

use crate::baseline::Baseline;
use crate::config::ZoneConfig;
use crate::cross_section::{CrossSection, CrossSectionBuilder};
use crate::error::TideZoneError;
use crate::geodesic::GeodesicSolver;
use tidezone_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
use tidezone_types::ClosedContour;

/// Quadrilateral between two consecutive cross-sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    index: usize,
    polygon: ClosedContour<GeoPoint2d>,
}

impl Zone {
    /// Creates a zone from its 1-based index and its vertices.
    pub fn new(index: usize, polygon: ClosedContour<GeoPoint2d>) -> Self {
        Self { index, polygon }
    }

    /// 1-based position of the zone in generation order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Zone identifier used in the zone file, `A1`, `A2`, ...
    pub fn name(&self) -> String {
        format!("A{}", self.index)
    }

    /// Label used on the zone map, `zone001`, `zone002`, ...
    pub fn map_label(&self) -> String {
        format!("zone{:03}", self.index)
    }

    /// The four vertices in the order `i.A, i.B, (i+1).B, (i+1).A`. The ring is not closed explicitly.
    pub fn polygon(&self) -> &ClosedContour<GeoPoint2d> {
        &self.polygon
    }

    /// Arithmetic mean of the vertices.
    pub fn label_position(&self) -> GeoPoint2d {
        let count = self.polygon.len().max(1) as f64;
        let (lat, lon) = self
            .polygon
            .iter_points()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat(), lon + p.lon()));
        GeoPoint2d::latlon(lat / count, lon / count)
    }
}

/// Pairs consecutive cross-sections into zones.
///
/// Produces `sections.len() - 1` zones (none for fewer than two sections).
pub fn assemble(sections: &[CrossSection]) -> Vec<Zone> {
    sections
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            Zone::new(
                i + 1,
                ClosedContour::new(vec![
                    pair[0].endpoint_a(),
                    pair[0].endpoint_b(),
                    pair[1].endpoint_b(),
                    pair[1].endpoint_a(),
                ]),
            )
        })
        .collect()
}

/// All zones generated for one baseline and one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCollection {
    baseline: Baseline,
    config: ZoneConfig,
    zones: Vec<Zone>,
}

impl ZoneCollection {
    /// Runs the whole pipeline for two stations: validates the configuration, solves the baseline, builds the
    /// cross-sections and assembles them.
    pub fn generate(
        solver: &GeodesicSolver,
        config: ZoneConfig,
        station_a: GeoPoint2d,
        station_b: GeoPoint2d,
    ) -> Result<(Self, Vec<CrossSection>), TideZoneError> {
        config.validate()?;
        let baseline = Baseline::new(solver, station_a, station_b)?;
        baseline.log_summary();

        let sections = CrossSectionBuilder::from_config(&config)
            .with_solver(*solver)
            .build(&baseline)?;
        let collection = Self::from_cross_sections(baseline, config, &sections);

        log::info!("Generated {} zones", collection.len());
        Ok((collection, sections))
    }

    /// Assembles the zones of already built cross-sections.
    pub fn from_cross_sections(
        baseline: Baseline,
        config: ZoneConfig,
        sections: &[CrossSection],
    ) -> Self {
        Self {
            baseline,
            config,
            zones: assemble(sections),
        }
    }

    /// Baseline the zones were generated for.
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Configuration the zones were generated with.
    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Zones in index order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Number of zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// True if there are no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterates over the zones.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }
}

//! Geometry handed to the rendering layer.
//!
//! The engine never draws anything itself. It produces [`LinePrimitives`] in chart coordinates for the chart
//! overlay and a [`ZoneMap`] in geographic coordinates for the separate zone plot.

use crate::baseline::Baseline;
use crate::cross_section::CrossSection;
use crate::dms::{lat_to_dms, lon_to_dms};
use crate::error::TideZoneError;
use crate::zone::ZoneCollection;
use tidezone_types::cartesian::Point2d;
use tidezone_types::geo::{Crs, GeoPoint, GeoPoint2d};
use tidezone_types::{ClosedContour, Segment};

/// Baseline and perpendicular segments in chart coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinePrimitives {
    /// Segment between the two stations.
    pub baseline: Option<Segment<Point2d>>,
    /// One segment per cross-section, from endpoint A to endpoint B, in index order.
    pub perpendiculars: Vec<Segment<Point2d>>,
}

impl LinePrimitives {
    /// Projects the baseline and the cross-sections into the chart CRS.
    pub fn project(
        crs: &Crs,
        baseline: &Baseline,
        sections: &[CrossSection],
    ) -> Result<Self, TideZoneError> {
        let baseline = project_segment(crs, &Segment(baseline.station_a(), baseline.station_b()))?;
        let perpendiculars = sections
            .iter()
            .map(|section| project_segment(crs, &section.segment()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            baseline: Some(baseline),
            perpendiculars,
        })
    }

    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.baseline.is_none() && self.perpendiculars.is_empty()
    }
}

pub(crate) fn project_segment(
    crs: &Crs,
    segment: &Segment<GeoPoint2d>,
) -> Result<Segment<Point2d>, TideZoneError> {
    segment
        .project(crs)
        .ok_or_else(|| TideZoneError::ProjectionFailed(format!("{segment:?}")))
}

/// One zone as drawn on the zone map.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMapEntry {
    /// Label, `zone001`, `zone002`, ...
    pub label: String,
    /// Geographic ring of the zone.
    pub ring: ClosedContour<GeoPoint2d>,
    /// Where the label is placed.
    pub label_position: GeoPoint2d,
}

/// Zones of a collection prepared for the zone map plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneMap {
    /// Entries in zone index order.
    pub entries: Vec<ZoneMapEntry>,
}

impl From<&ZoneCollection> for ZoneMap {
    fn from(collection: &ZoneCollection) -> Self {
        let entries = collection
            .iter()
            .map(|zone| ZoneMapEntry {
                label: zone.map_label(),
                ring: zone.polygon().clone(),
                label_position: zone.label_position(),
            })
            .collect();
        Self { entries }
    }
}

/// Label of a tick on the horizontal chart axis: longitude of the chart point `(x, 0)` in DMS.
pub fn format_x_tick(crs: &Crs, x: f64) -> Result<String, TideZoneError> {
    let point = Point2d::new(x, 0.0);
    let geo = crs
        .to_geographic(&point)
        .ok_or_else(|| TideZoneError::ProjectionFailed(format!("{point:?}")))?;
    Ok(lon_to_dms(geo.lon()))
}

/// Label of a tick on the vertical chart axis: latitude of the chart point `(0, y)` in DMS.
pub fn format_y_tick(crs: &Crs, y: f64) -> Result<String, TideZoneError> {
    let point = Point2d::new(0.0, y);
    let geo = crs
        .to_geographic(&point)
        .ok_or_else(|| TideZoneError::ProjectionFailed(format!("{point:?}")))?;
    Ok(lat_to_dms(geo.lat()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoneConfig;
    use crate::geodesic::GeodesicSolver;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use tidezone_types::latlon;

    #[test]
    fn geographic_crs_lines_match_stations() {
        let (collection, sections) = ZoneCollection::generate(
            &GeodesicSolver::wgs84(),
            ZoneConfig::new(2, 1.0),
            latlon!(-23.0, -43.0),
            latlon!(-23.01, -43.0),
        )
        .expect("valid input");

        let lines = LinePrimitives::project(&Crs::geographic(), collection.baseline(), &sections)
            .expect("projectable");
        let baseline = lines.baseline.expect("baseline is set");

        assert_abs_diff_eq!(baseline.start().x, -43.0);
        assert_abs_diff_eq!(baseline.start().y, -23.0);
        assert_abs_diff_eq!(baseline.end().y, -23.01);
        assert_eq!(lines.perpendiculars.len(), 3);
        assert_abs_diff_eq!(lines.perpendiculars[1].start().x, sections[1].endpoint_a().lon());
    }

    #[test]
    fn zone_map_labels() {
        let (collection, _) = ZoneCollection::generate(
            &GeodesicSolver::wgs84(),
            ZoneConfig::new(3, 1.0),
            latlon!(10.0, 10.0),
            latlon!(10.0, 10.05),
        )
        .expect("valid input");

        let map = ZoneMap::from(&collection);
        let labels: Vec<&str> = map.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["zone001", "zone002", "zone003"]);
        assert!(map.entries.iter().all(|e| e.ring.len() == 4));
    }

    #[test]
    fn tick_labels() {
        let crs = Crs::geographic();
        assert_eq!(format_x_tick(&crs, -43.5).expect("valid"), "43°30'00.0\"W");
        assert_eq!(format_y_tick(&crs, 12.25).expect("valid"), "12°15'00.0\"N");

        let mercator = Crs::web_mercator();
        assert!(format_y_tick(&mercator, 1_000_000.0).expect("valid").starts_with("8°56'"));
        assert!(format_x_tick(&mercator, -1_000_000.0).expect("valid").ends_with('W'));
    }

    #[test]
    fn tick_outside_projection_fails() {
        assert_matches!(
            format_x_tick(&Crs::geographic(), f64::NAN),
            Err(TideZoneError::ProjectionFailed(_))
        );
    }
}

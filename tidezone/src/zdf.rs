//! Writer of zone definition (ZDF) files.
//!
//! A ZDF file lists every zone as a `[ZONE]` block with its vertices in decimal degrees (latitude first, 8
//! decimal places), followed by the `[TIDE_ZONE]`, `[TIDE_STATION]` and `[TIDE_AVERAGE]` sections. Only the
//! average section is filled, with one empty entry per zone:
//!
//! ```text
//! [ZONE_DEF_VERSION_2]
//!
//! [ZONE]
//! A1,5
//! -22.99998456,-43.00452161
//! ...
//!
//! [TIDE_ZONE]
//!
//! [TIDE_STATION]
//!
//! [TIDE_AVERAGE]
//! A1,
//! ```

use crate::error::TideZoneError;
use crate::zone::{Zone, ZoneCollection};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tidezone_types::geo::GeoPoint;

const HEADER: &str = "[ZONE_DEF_VERSION_2]";
const VERTEX_COUNT_TAG: u32 = 5;

/// Serializes zones into the ZDF format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZdfWriter {
    closed_rings: bool,
}

impl ZdfWriter {
    /// Creates a writer that writes four vertices per zone.
    pub fn new() -> Self {
        Self::default()
    }

    /// If set, the first vertex of every zone is repeated at the end of the block, so that the number of
    /// coordinate lines matches the `5` tag. Older readers of the format expect this layout.
    pub fn with_closed_rings(mut self, closed_rings: bool) -> Self {
        self.closed_rings = closed_rings;
        self
    }

    /// Writes the zones of the collection into `writer`.
    pub fn write(&self, collection: &ZoneCollection, writer: impl Write) -> Result<(), TideZoneError> {
        self.write_zones(collection.zones(), writer)
    }

    /// Writes the given zones into `writer`.
    pub fn write_zones(&self, zones: &[Zone], mut writer: impl Write) -> Result<(), TideZoneError> {
        write!(writer, "{HEADER}\n\n")?;

        for zone in zones {
            write!(writer, "[ZONE]\n{},{VERTEX_COUNT_TAG}\n", zone.name())?;

            let polygon = zone.polygon();
            let vertices: Vec<_> = if self.closed_rings {
                polygon.iter_points_closing().collect()
            } else {
                polygon.iter_points().collect()
            };

            for vertex in vertices {
                writeln!(writer, "{:.8},{:.8}", vertex.lat(), vertex.lon())?;
            }

            writeln!(writer)?;
        }

        write!(writer, "[TIDE_ZONE]\n\n[TIDE_STATION]\n\n[TIDE_AVERAGE]\n")?;
        for zone in zones {
            writeln!(writer, "{},", zone.name())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Writes the zones of the collection into the file at `path`, replacing its contents.
    pub fn export(&self, collection: &ZoneCollection, path: impl AsRef<Path>) -> Result<(), TideZoneError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write(collection, BufWriter::new(file))?;

        log::info!("Exported {} zones to {}", collection.len(), path.display());
        Ok(())
    }
}

/// Exports a collection with the default four-vertex layout.
pub fn export(collection: &ZoneCollection, path: impl AsRef<Path>) -> Result<(), TideZoneError> {
    ZdfWriter::new().export(collection, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZoneConfig;
    use crate::geodesic::GeodesicSolver;
    use assert_matches::assert_matches;
    use insta::assert_snapshot;
    use tidezone_types::{latlon, ClosedContour};

    fn square(index: usize, lat: f64, lon: f64) -> Zone {
        Zone::new(
            index,
            ClosedContour::new(vec![
                latlon!(lat, lon),
                latlon!(lat, lon + 0.01),
                latlon!(lat - 0.01, lon + 0.01),
                latlon!(lat - 0.01, lon),
            ]),
        )
    }

    fn write_to_string(writer: ZdfWriter, zones: &[Zone]) -> String {
        let mut buffer = Vec::new();
        writer.write_zones(zones, &mut buffer).expect("write to memory");
        String::from_utf8(buffer).expect("ascii output")
    }

    #[test]
    fn two_zones() {
        let zones = [square(1, -23.0, -43.0), square(2, -23.01, -43.0)];
        assert_snapshot!(write_to_string(ZdfWriter::new(), &zones), @r"
        [ZONE_DEF_VERSION_2]

        [ZONE]
        A1,5
        -23.00000000,-43.00000000
        -23.00000000,-42.99000000
        -23.01000000,-42.99000000
        -23.01000000,-43.00000000

        [ZONE]
        A2,5
        -23.01000000,-43.00000000
        -23.01000000,-42.99000000
        -23.02000000,-42.99000000
        -23.02000000,-43.00000000

        [TIDE_ZONE]

        [TIDE_STATION]

        [TIDE_AVERAGE]
        A1,
        A2,
        ");
    }

    #[test]
    fn closed_rings_repeat_first_vertex() {
        let zones = [square(1, 10.5, 20.25)];
        assert_snapshot!(write_to_string(ZdfWriter::new().with_closed_rings(true), &zones), @r"
        [ZONE_DEF_VERSION_2]

        [ZONE]
        A1,5
        10.50000000,20.25000000
        10.50000000,20.26000000
        10.49000000,20.26000000
        10.49000000,20.25000000
        10.50000000,20.25000000

        [TIDE_ZONE]

        [TIDE_STATION]

        [TIDE_AVERAGE]
        A1,
        ");
    }

    #[test]
    fn no_zones() {
        assert_eq!(
            write_to_string(ZdfWriter::new(), &[]),
            "[ZONE_DEF_VERSION_2]\n\n[TIDE_ZONE]\n\n[TIDE_STATION]\n\n[TIDE_AVERAGE]\n"
        );
    }

    #[test]
    fn export_is_idempotent() {
        let (collection, _) = ZoneCollection::generate(
            &GeodesicSolver::wgs84(),
            ZoneConfig::new(4, 1.0),
            latlon!(-23.0, -43.0),
            latlon!(-23.01, -43.0),
        )
        .expect("valid input");

        let path = std::env::temp_dir().join(format!("tidezone_idempotent_{}.zdf", std::process::id()));
        export(&collection, &path).expect("first export");
        let first = std::fs::read(&path).expect("readable");
        export(&collection, &path).expect("second export");
        let second = std::fs::read(&path).expect("readable");
        let _ = std::fs::remove_file(&path);

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8_lossy(&first).matches("[ZONE]\n").count(),
            4
        );
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let (collection, _) = ZoneCollection::generate(
            &GeodesicSolver::wgs84(),
            ZoneConfig::new(1, 1.0),
            latlon!(0.0, 0.0),
            latlon!(0.0, 0.01),
        )
        .expect("valid input");

        let path = std::env::temp_dir()
            .join("tidezone_no_such_directory")
            .join("zonas.zdf");
        assert_matches!(export(&collection, path), Err(TideZoneError::ExportIo(_)));
    }
}

//! Error types used by the crate.

use thiserror::Error;
use tidezone_types::error::TypesError;
use tidezone_types::geo::GeoPoint2d;

/// Tide zone engine error type.
#[derive(Debug, Error)]
pub enum TideZoneError {
    /// The two baseline stations coincide, so the baseline has no azimuth.
    #[error("baseline stations coincide")]
    DegenerateBaseline,
    /// The number of perpendicular lines must be at least 1.
    #[error("invalid number of lines: {0} (must be at least 1)")]
    InvalidLineCount(usize),
    /// The perpendicular length must be a positive number of nautical miles.
    #[error("invalid perpendicular length: {0} NM (must be positive)")]
    InvalidLength(f64),
    /// The zone file could not be written.
    #[error("failed to write zone file: {0}")]
    ExportIo(#[from] std::io::Error),
    /// The chart CRS cannot be used.
    #[error(transparent)]
    UnresolvedCrs(#[from] TypesError),
    /// A station is not a valid WGS84 position.
    #[error("station {0:?} is outside the valid coordinate range")]
    InvalidStation(GeoPoint2d),
    /// A point could not be converted between the chart CRS and geographic coordinates.
    #[error("cannot convert {0} between chart and geographic coordinates")]
    ProjectionFailed(String),
    /// Configuration could not be read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

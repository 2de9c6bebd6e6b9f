//! Tidezone builds tide zones between two reference stations on a nautical chart and writes them into a zone
//! definition (ZDF) file.
//!
//! # Quick start
//!
//! ```no_run
//! use tidezone::{zdf, GeodesicSolver, ZoneCollection, ZoneConfig};
//! use tidezone::tidezone_types::latlon;
//!
//! let (zones, _cross_sections) = ZoneCollection::generate(
//!     &GeodesicSolver::wgs84(),
//!     ZoneConfig::new(4, 1.0),
//!     latlon!(-23.0, -43.0),
//!     latlon!(-23.01, -43.0),
//! )?;
//! zdf::export(&zones, "zonas.zdf")?;
//! # Ok::<(), tidezone::error::TideZoneError>(())
//! ```
//!
//! # How zones are built
//!
//! * The [`Baseline`] connects the two stations. Its azimuth and length are found by solving the inverse geodesic
//!   problem on the WGS84 ellipsoid ([`GeodesicSolver`]).
//! * The [`CrossSectionBuilder`] splits the baseline into `num_lines` equal parts and puts a perpendicular line of
//!   `length_nm` nautical miles through every split point, including both stations.
//! * Every two consecutive cross-sections bound one [`Zone`]. Zones are numbered from 1.
//!
//! Everything above works in geographic coordinates. Charts usually come in a projected CRS, so the
//! [`InputSession`](control::InputSession) converts clicks on the chart into stations, and the [`render`] module
//! converts the results back into chart coordinates for drawing.

mod baseline;
pub mod config;
pub mod control;
mod cross_section;
pub mod dms;
pub mod error;
mod geodesic;
pub mod render;
pub mod zdf;
mod zone;

pub use baseline::Baseline;
pub use config::ZoneConfig;
pub use cross_section::{CrossSection, CrossSectionBuilder};
pub use geodesic::{normalize_azimuth, GeodesicLine, GeodesicSolver, COINCIDENCE_EPSILON};
pub use zone::{assemble, Zone, ZoneCollection};

// Reexport tidezone_types
pub use tidezone_types;

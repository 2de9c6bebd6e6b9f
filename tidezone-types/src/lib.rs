//! Geometry primitives shared by the tide zone engine.
//!
//! Two coordinate spaces are used throughout:
//!
//! * **geographic** - latitude and longitude in degrees on the WGS84 ellipsoid (see [`geo::GeoPoint2d`]). All
//!   geodesic math is done in this space.
//! * **chart** - cartesian coordinates in the native CRS of a navigational chart (see [`cartesian::Point2d`]). These
//!   are only used to receive click positions and to give plotted positions back to the rendering layer.
//!
//! The two are connected by a [`geo::Crs`], which is resolved once per loaded chart.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod segment;

pub use contour::ClosedContour;
pub use segment::Segment;

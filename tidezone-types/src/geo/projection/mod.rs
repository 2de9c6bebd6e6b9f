//! Conversion between geographic coordinates and chart coordinates.

mod identity;
mod web_mercator;

pub use identity::IdentityProjection;
pub use web_mercator::WebMercator;

#[cfg(feature = "geodesy")]
mod geodesy;
#[cfg(feature = "geodesy")]
pub use geodesy::GeodesyProjection;

/// Bidirectional conversion between two coordinate spaces.
///
/// `None` is returned when the point cannot be represented in the target space (for example, the poles in Web
/// Mercator).
pub trait Projection {
    /// Type of the input points.
    type InPoint;
    /// Type of the output points.
    type OutPoint;

    /// Converts an input point into the output space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts an output point back into the input space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

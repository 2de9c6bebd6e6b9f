//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion between
//! geographic coordinates and the native coordinates of a chart (see [`Projection`] and [`Crs`]).

mod crs;
mod datum;
mod point;
pub mod projection;

pub use crs::{Crs, ProjectionType};
pub use datum::Datum;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::Projection;

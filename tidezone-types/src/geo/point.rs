use approx::AbsDiffEq;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Point on the surface of the ellipsoid, given in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a point from longitude and latitude.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point on the WGS84 ellipsoid (EPSG:4326). This is the type of the reference stations and of every vertex
/// the engine produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Returns true if both coordinates are finite and inside the valid ranges (`[-90, 90]` for latitude,
    /// `[-180, 180]` for longitude).
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use tidezone_types::geo::GeoPoint;
/// use tidezone_types::latlon;
///
/// let point = latlon!(-23.0, -43.0);
/// assert_eq!(point.lat(), -23.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lonlat_swaps_arguments() {
        let point = GeoPoint2d::lonlat(-43.0, -23.0);
        assert_eq!(point.lat(), -23.0);
        assert_eq!(point.lon(), -43.0);
    }

    #[test]
    fn validity() {
        assert!(latlon!(-23.0, -43.0).is_valid());
        assert!(latlon!(90.0, 180.0).is_valid());
        assert!(!latlon!(91.0, 0.0).is_valid());
        assert!(!latlon!(0.0, f64::NAN).is_valid());
    }
}

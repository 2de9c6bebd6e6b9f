use crate::cartesian::Point2d;
use crate::error::TypesError;
use crate::geo::datum::Datum;
use crate::geo::point::GeoPoint2d;
use crate::geo::projection::{IdentityProjection, Projection, WebMercator};
use std::fmt::{Debug, Formatter};

/// Coordinate reference system of a chart, resolved once when the chart is loaded.
///
/// The handle owns the projection between geographic coordinates and the native coordinates of the chart, so
/// the definition string is never parsed again after [`Crs::from_definition`] succeeds.
///
/// ```
/// use tidezone_types::geo::{Crs, ProjectionType};
///
/// let crs = Crs::from_definition("EPSG:3857")?;
/// assert_eq!(crs.projection_type(), &ProjectionType::WebMercator);
/// # Ok::<(), tidezone_types::error::TypesError>(())
/// ```
pub struct Crs {
    definition: String,
    projection_type: ProjectionType,
    projection: Box<dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>>,
}

/// Kind of projection a [`Crs`] resolved to.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Chart is in geographic coordinates (EPSG:4326): `x` is longitude, `y` is latitude.
    Geographic,
    /// Web Mercator (EPSG:3857).
    WebMercator,
    /// Universal Transverse Mercator on WGS84.
    Utm {
        /// Zone number, 1..=60.
        zone: u8,
        /// Southern hemisphere zone (false northing of 10 000 km).
        south: bool,
    },
    /// Any other operator definition understood by the `geodesy` crate.
    Other(String),
}

impl Crs {
    /// Resolves a CRS from its definition.
    ///
    /// Accepted definitions are `EPSG:<code>` (4326, 3857, 900913, and the WGS84 UTM zones 32601-32660 and
    /// 32701-32760), a WKT string carrying one of those codes as its authority, `WGS84`, or an operator
    /// definition of the `geodesy` crate.
    pub fn from_definition(definition: &str) -> Result<Self, TypesError> {
        let trimmed = definition.trim();
        if trimmed.is_empty() {
            return Err(TypesError::unresolved(definition, "empty definition"));
        }

        if trimmed.eq_ignore_ascii_case("WGS84") {
            return Ok(Self::geographic());
        }

        match parse_epsg(trimmed) {
            Some(code) => Self::from_epsg(code).map_err(|reason| TypesError::unresolved(definition, reason)),
            None => Self::from_operator(trimmed),
        }
    }

    /// Geographic WGS84 CRS.
    pub fn geographic() -> Self {
        Self {
            definition: "EPSG:4326".to_string(),
            projection_type: ProjectionType::Geographic,
            projection: Box::new(IdentityProjection::<GeoPoint2d, Point2d>::new()),
        }
    }

    /// Web Mercator CRS.
    pub fn web_mercator() -> Self {
        Self {
            definition: "EPSG:3857".to_string(),
            projection_type: ProjectionType::WebMercator,
            projection: Box::new(WebMercator::<GeoPoint2d, Point2d>::new(Datum::WGS84)),
        }
    }

    fn from_epsg(code: u32) -> Result<Self, String> {
        match code {
            4326 => Ok(Self::geographic()),
            3857 | 900913 => Ok(Self::web_mercator()),
            32601..=32660 => Self::utm((code - 32600) as u8, false),
            32701..=32760 => Self::utm((code - 32700) as u8, true),
            _ => Err(format!("EPSG:{code} is not supported")),
        }
    }

    #[cfg(feature = "geodesy")]
    fn utm(zone: u8, south: bool) -> Result<Self, String> {
        use crate::geo::projection::GeodesyProjection;

        let mut op = format!("utm zone={zone} ellps=WGS84");
        if south {
            op.push_str(" south");
        }

        let projection = GeodesyProjection::<GeoPoint2d, Point2d>::new(&op)
            .ok_or_else(|| format!("invalid operator '{op}'"))?;
        let base = if south { 32700 } else { 32600 };
        Ok(Self {
            definition: format!("EPSG:{}", base + u32::from(zone)),
            projection_type: ProjectionType::Utm { zone, south },
            projection: Box::new(projection),
        })
    }

    #[cfg(not(feature = "geodesy"))]
    fn utm(_zone: u8, _south: bool) -> Result<Self, String> {
        Err("UTM projections require the `geodesy` feature".to_string())
    }

    #[cfg(feature = "geodesy")]
    fn from_operator(definition: &str) -> Result<Self, TypesError> {
        use crate::geo::projection::GeodesyProjection;

        let projection = GeodesyProjection::<GeoPoint2d, Point2d>::new(definition)
            .ok_or_else(|| TypesError::unresolved(definition, "not an EPSG code or a known operator"))?;
        Ok(Self {
            definition: definition.to_string(),
            projection_type: ProjectionType::Other(definition.to_string()),
            projection: Box::new(projection),
        })
    }

    #[cfg(not(feature = "geodesy"))]
    fn from_operator(definition: &str) -> Result<Self, TypesError> {
        Err(TypesError::unresolved(definition, "not an EPSG code"))
    }

    /// Normalized definition of the CRS.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Kind of projection the CRS resolved to.
    pub fn projection_type(&self) -> &ProjectionType {
        &self.projection_type
    }

    /// Converts a geographic point into chart coordinates.
    pub fn to_chart(&self, point: &GeoPoint2d) -> Option<Point2d> {
        self.projection.project(point)
    }

    /// Converts a chart point into geographic coordinates.
    pub fn to_geographic(&self, point: &Point2d) -> Option<GeoPoint2d> {
        self.projection.unproject(point)
    }
}

impl Projection for Crs {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &GeoPoint2d) -> Option<Point2d> {
        self.to_chart(input)
    }

    fn unproject(&self, input: &Point2d) -> Option<GeoPoint2d> {
        self.to_geographic(input)
    }
}

impl Debug for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crs")
            .field("definition", &self.definition)
            .field("projection_type", &self.projection_type)
            .finish()
    }
}

/// Extracts the EPSG code from `EPSG:xxxx`, WKT1 `AUTHORITY["EPSG","xxxx"]` or WKT2 `ID["EPSG",xxxx]`.
fn parse_epsg(definition: &str) -> Option<u32> {
    if let Some(prefix) = definition.get(..5) {
        if prefix.eq_ignore_ascii_case("EPSG:") {
            return definition[5..].trim().parse().ok();
        }
    }

    if let Some(pos) = definition.rfind("AUTHORITY[\"EPSG\",\"") {
        let start = pos + 18;
        let end = definition[start..].find('"')?;
        return definition[start..start + end].parse().ok();
    }

    if let Some(pos) = definition.rfind("ID[\"EPSG\",") {
        let start = pos + 10;
        let end = definition[start..].find(']')?;
        return definition[start..start + end].trim().parse().ok();
    }

    None
}

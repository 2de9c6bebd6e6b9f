//! Parameters of the perpendicular lines.

use crate::error::TideZoneError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Meters in one international nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// How many perpendicular lines to generate along a baseline and how long they are.
///
/// ```
/// use tidezone::ZoneConfig;
///
/// let config = ZoneConfig::from_json_str(r#"{ "num_lines": 8, "length_nm": 0.5 }"#)?;
/// assert_eq!(config.half_length_m(), 463.0);
/// # Ok::<(), tidezone::error::TideZoneError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Number of intervals the baseline is split into. `num_lines + 1` perpendiculars and `num_lines` zones are
    /// generated.
    pub num_lines: usize,
    /// Full length of every perpendicular line in nautical miles.
    pub length_nm: f64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            num_lines: 5,
            length_nm: 1.0,
        }
    }
}

impl ZoneConfig {
    /// Creates a new configuration. The values are checked by [`ZoneConfig::validate`].
    pub fn new(num_lines: usize, length_nm: f64) -> Self {
        Self { num_lines, length_nm }
    }

    /// Checks the line count first, then the length.
    pub fn validate(&self) -> Result<(), TideZoneError> {
        if self.num_lines == 0 {
            return Err(TideZoneError::InvalidLineCount(self.num_lines));
        }

        if !(self.length_nm.is_finite() && self.length_nm > 0.0) {
            return Err(TideZoneError::InvalidLength(self.length_nm));
        }

        Ok(())
    }

    /// Half of the perpendicular length in meters, i.e. the distance from the baseline to each end.
    pub fn half_length_m(&self) -> f64 {
        self.length_nm * METERS_PER_NAUTICAL_MILE / 2.0
    }

    /// Parses and validates a JSON configuration. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, TideZoneError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| TideZoneError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TideZoneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            TideZoneError::InvalidConfig(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}

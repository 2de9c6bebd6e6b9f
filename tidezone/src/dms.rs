//! Degree-minute-second formatting of geographic coordinates.

/// Which axis a value belongs to. Selects the compass letters used by [`to_dms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `N` for values `>= 0`, `S` otherwise.
    Latitude,
    /// `E` for values `>= 0`, `W` otherwise.
    Longitude,
}

impl Axis {
    fn compass(self, value: f64) -> char {
        // -0.0 >= 0.0 holds, so the signed zero reads as N/E
        let positive = value >= 0.0;
        match (self, positive) {
            (Axis::Latitude, true) => 'N',
            (Axis::Latitude, false) => 'S',
            (Axis::Longitude, true) => 'E',
            (Axis::Longitude, false) => 'W',
        }
    }
}

/// Formats decimal degrees as `D°MM'SS.S"C`.
///
/// Minutes are zero-padded to two digits, seconds are rounded to one fractional digit and zero-padded to four
/// characters.
///
/// ```
/// use tidezone::dms::{to_dms, Axis};
///
/// assert_eq!(to_dms(-23.5, Axis::Latitude), "23°30'00.0\"S");
/// ```
pub fn to_dms(value: f64, axis: Axis) -> String {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes_float = (abs - degrees) * 60.0;
    let minutes = minutes_float.floor();
    let seconds = (minutes_float - minutes) * 60.0;

    format!(
        "{}°{:02}'{:04.1}\"{}",
        degrees as u64,
        minutes as u64,
        seconds,
        axis.compass(value)
    )
}

/// Formats a latitude, see [`to_dms`].
pub fn lat_to_dms(value: f64) -> String {
    to_dms(value, Axis::Latitude)
}

/// Formats a longitude, see [`to_dms`].
pub fn lon_to_dms(value: f64) -> String {
    to_dms(value, Axis::Longitude)
}

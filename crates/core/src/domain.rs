use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Date-time format used at the logbook's outer boundary (CLI input, display).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shutter speed tokens selectable for a frame, slowest to fastest.
/// Whole seconds carry a trailing double quote (`30"`), sub-second speeds are
/// fractions. `B` is bulb and has no numeric value.
pub const SHUTTER_SPEED_VALUES: &[&str] = &[
    "B", "30\"", "25\"", "20\"", "15\"", "13\"", "10\"", "8\"", "6\"", "5\"", "4\"", "3.2\"",
    "2.5\"", "2\"", "1.6\"", "1.3\"", "1\"", "0.8\"", "0.6\"", "0.5\"", "1/3", "1/4", "1/5",
    "1/6", "1/8", "1/10", "1/13", "1/15", "1/20", "1/25", "1/30", "1/40", "1/50", "1/60",
    "1/80", "1/100", "1/125", "1/160", "1/200", "1/250", "1/320", "1/400", "1/500", "1/640",
    "1/800", "1/1000", "1/1250", "1/1600", "1/2000", "1/2500", "1/3200", "1/4000", "1/8000",
];

/// Aperture tokens selectable for a frame, widest to narrowest.
pub const APERTURE_VALUES: &[&str] = &[
    "1.0", "1.1", "1.2", "1.4", "1.6", "1.8", "2.0", "2.2", "2.5", "2.8", "3.2", "3.5", "4.0",
    "4.5", "5.0", "5.6", "6.3", "7.1", "8", "9", "10", "11", "13", "14", "16", "18", "20", "22",
    "25", "29", "32", "36", "45", "64",
];

/// A camera body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub serial_number: Option<String>,
}

impl Camera {
    /// "Make Model" as shown in listings.
    pub fn name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// A lens, with its aperture and focal length ranges.
/// `min_aperture` is the narrowest stop (largest f-number), `max_aperture`
/// the widest. Fixed focal length lenses have `min_focal_length ==
/// max_focal_length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub min_aperture: Option<String>,
    pub max_aperture: Option<String>,
    pub min_focal_length: i64,
    pub max_focal_length: i64,
}

impl Lens {
    pub fn name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// A lens filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub id: i64,
    pub make: String,
    pub model: String,
}

impl Filter {
    pub fn name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// A roll of film: a named shooting session owning an ordered set of frames.
/// `camera_id: None` means the roll is not tied to a camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    pub id: i64,
    pub name: String,
    pub date: NaiveDateTime,
    pub note: Option<String>,
    pub camera_id: Option<i64>,
    pub archived: bool,
}

/// One exposure within a roll. `count` is the user-assigned frame number,
/// scoped to the roll and not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: i64,
    pub roll_id: i64,
    pub count: i64,
    pub date: Option<NaiveDateTime>,
    pub lens_id: Option<i64>,
    pub shutter_speed: Option<String>,
    pub aperture: Option<String>,
    pub note: Option<String>,
    pub location: Option<GeoPoint>,
    pub formatted_address: Option<String>,
}

/// A GPS position. Round-trips through the `"<latitude> <longitude>"`
/// space-separated text form used by frame exports and CLI input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.split_whitespace();
        let (lat, lon) = match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lon), None) => (lat, lon),
            _ => return Err(Error::InvalidLocation(s.to_string())),
        };
        let latitude: f64 = lat
            .parse()
            .map_err(|_| Error::InvalidLocation(s.to_string()))?;
        let longitude: f64 = lon
            .parse()
            .map_err(|_| Error::InvalidLocation(s.to_string()))?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLocation(s.to_string()));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}

/// Which rolls a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollFilter {
    Active,
    Archived,
    All,
}

/// Aggregate counts for the status dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub cameras: usize,
    pub lenses: usize,
    pub filters: usize,
    pub rolls: usize,
    pub frames: usize,
}

/// Parse a date-time in the logbook's `YYYY-MM-DD HH:MM` form.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, Error> {
    NaiveDateTime::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Format a date-time in the logbook's `YYYY-MM-DD HH:MM` form.
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geopoint_parse_roundtrip() {
        let point: GeoPoint = "48.8566 2.3522".parse().unwrap();
        assert!((point.latitude - 48.8566).abs() < 1e-9);
        assert!((point.longitude - 2.3522).abs() < 1e-9);
        assert_eq!(point.to_string(), "48.8566 2.3522");
    }

    #[test]
    fn test_geopoint_parse_negative_hemispheres() {
        let point: GeoPoint = "-33.8688 151.2093".parse().unwrap();
        assert!(point.latitude < 0.0);
        assert!(point.longitude > 0.0);
    }

    #[test]
    fn test_geopoint_rejects_malformed() {
        assert!("".parse::<GeoPoint>().is_err());
        assert!("48.8566".parse::<GeoPoint>().is_err());
        assert!("48.8566 2.3522 7".parse::<GeoPoint>().is_err());
        assert!("north east".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_geopoint_rejects_out_of_range() {
        assert!("91.0 0.0".parse::<GeoPoint>().is_err());
        assert!("0.0 181.0".parse::<GeoPoint>().is_err());
        assert!("-90.0 -180.0".parse::<GeoPoint>().is_ok());
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-05-14 13:30").unwrap();
        assert_eq!(format_datetime(dt), "2024-05-14 13:30");
    }

    #[test]
    fn test_parse_datetime_rejects_malformed() {
        assert!(matches!(
            parse_datetime("14.5.2024"),
            Err(Error::InvalidDate(_))
        ));
        assert!(parse_datetime("2024-13-40 99:99").is_err());
    }

    #[test]
    fn test_token_tables_contain_canonical_values() {
        assert!(SHUTTER_SPEED_VALUES.contains(&"B"));
        assert!(SHUTTER_SPEED_VALUES.contains(&"30\""));
        assert!(SHUTTER_SPEED_VALUES.contains(&"1/125"));
        assert!(APERTURE_VALUES.contains(&"5.6"));
        assert!(APERTURE_VALUES.contains(&"1.4"));
    }
}

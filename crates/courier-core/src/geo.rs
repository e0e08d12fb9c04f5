//! Geographic coordinate type and great-circle distance.
//!
//! # Text-keyed equality
//!
//! `GeoCoord` keeps the latitude/longitude *text tokens* it was built from
//! alongside the parsed `f64` values, and defines equality, hashing, and
//! ordering over the text forms only.  Map data refers to the same physical
//! intersection from many street records; comparing the verbatim tokens makes
//! those references identical without any floating-point tolerance games.
//! The numeric values are used exclusively for distance and angle math.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate.
///
/// Immutable once created.  Construct with [`GeoCoord::new`] from textual
/// tokens (the loader path) or [`GeoCoord::from_degrees`] from numeric values
/// (tests and programmatic callers); the latter renders canonical 7-decimal
/// text so equal inputs always compare equal.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoord {
    lat: f64,
    lon: f64,
    lat_text: String,
    lon_text: String,
}

impl GeoCoord {
    /// Parse a coordinate from whitespace-free latitude/longitude tokens,
    /// retaining the tokens verbatim as the coordinate's identity.
    pub fn new(lat_text: &str, lon_text: &str) -> CoreResult<Self> {
        let lat: f64 = lat_text
            .parse()
            .map_err(|_| CoreError::BadLatitude(lat_text.to_string()))?;
        let lon: f64 = lon_text
            .parse()
            .map_err(|_| CoreError::BadLongitude(lon_text.to_string()))?;
        Ok(Self {
            lat,
            lon,
            lat_text: lat_text.to_string(),
            lon_text: lon_text.to_string(),
        })
    }

    /// Build a coordinate from numeric degrees, rendering canonical
    /// 7-decimal text (the precision of typical street map data).
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            lat_text: format!("{lat:.7}"),
            lon_text: format!("{lon:.7}"),
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    /// The verbatim latitude token this coordinate was built from.
    #[inline]
    pub fn latitude_text(&self) -> &str {
        &self.lat_text
    }

    /// The verbatim longitude token this coordinate was built from.
    #[inline]
    pub fn longitude_text(&self) -> &str {
        &self.lon_text
    }

    /// Haversine great-circle distance in miles.
    pub fn distance_miles(&self, other: &GeoCoord) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;
        const MILES_PER_KM: f64 = 1.0 / 1.609344;

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let u = ((lat2 - lat1) / 2.0).sin();
        let v = ((other.lon - self.lon).to_radians() / 2.0).sin();

        let km = 2.0 * EARTH_RADIUS_KM * (u * u + lat1.cos() * lat2.cos() * v * v).sqrt().asin();
        km * MILES_PER_KM
    }
}

// Identity is the text form, not the parsed floats.
impl PartialEq for GeoCoord {
    fn eq(&self, other: &Self) -> bool {
        self.lat_text == other.lat_text && self.lon_text == other.lon_text
    }
}

impl Eq for GeoCoord {}

impl Hash for GeoCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat_text.hash(state);
        self.lon_text.hash(state);
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lat_text
            .cmp(&other.lat_text)
            .then_with(|| self.lon_text.cmp(&other.lon_text))
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat_text, self.lon_text)
    }
}

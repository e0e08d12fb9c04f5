//! Directed street segments and line-angle primitives.

use crate::geo::GeoCoord;

/// A directed street edge from `start` to `end`, carrying its street name.
///
/// A physical road appears in the network as two segments with swapped
/// endpoints and the same name.  Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetSegment {
    pub start: GeoCoord,
    pub end: GeoCoord,
    pub name: String,
}

impl StreetSegment {
    pub fn new(start: GeoCoord, end: GeoCoord, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }

    /// A segment with swapped endpoints and the same name.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            name: self.name.clone(),
        }
    }

    /// Length of the segment in miles.
    #[inline]
    pub fn length_miles(&self) -> f64 {
        self.start.distance_miles(&self.end)
    }

    /// Bearing of the segment in degrees, normalized to `[0, 360)`.
    ///
    /// Measured as `atan2(Δlat, Δlon)`: due east is 0°, north 90°,
    /// west 180°, south 270°.
    pub fn angle(&self) -> f64 {
        let degrees = (self.end.latitude() - self.start.latitude())
            .atan2(self.end.longitude() - self.start.longitude())
            .to_degrees();
        if degrees < 0.0 { degrees + 360.0 } else { degrees }
    }

    /// Angle swept from this segment's bearing to `next`'s, normalized to
    /// `[0, 360)`.  Used to classify turns between consecutive path segments.
    pub fn angle_to(&self, next: &StreetSegment) -> f64 {
        let degrees = next.angle() - self.angle();
        if degrees < 0.0 { degrees + 360.0 } else { degrees }
    }
}

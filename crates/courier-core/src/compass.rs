//! Eight-way compass classification of a segment bearing.

use std::fmt;

/// One of the 8 principal compass directions.
///
/// Buckets are 45° wide, half-open, with boundaries at the midpoints between
/// the principal directions: a bearing in `[337.5, 360) ∪ [0, 22.5)` is east,
/// `[22.5, 67.5)` is northeast, and so on counterclockwise.  A boundary value
/// resolves to the upper bucket (22.5° is northeast, not east).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl CompassDirection {
    /// Classify a bearing in degrees.  Values outside `[0, 360)` are wrapped.
    pub fn from_degrees(degrees: f64) -> Self {
        let degrees = degrees.rem_euclid(360.0);
        match degrees {
            d if d < 22.5 => CompassDirection::East,
            d if d < 67.5 => CompassDirection::Northeast,
            d if d < 112.5 => CompassDirection::North,
            d if d < 157.5 => CompassDirection::Northwest,
            d if d < 202.5 => CompassDirection::West,
            d if d < 247.5 => CompassDirection::Southwest,
            d if d < 292.5 => CompassDirection::South,
            d if d < 337.5 => CompassDirection::Southeast,
            _ => CompassDirection::East,
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompassDirection::East => "east",
            CompassDirection::Northeast => "northeast",
            CompassDirection::North => "north",
            CompassDirection::Northwest => "northwest",
            CompassDirection::West => "west",
            CompassDirection::Southwest => "southwest",
            CompassDirection::South => "south",
            CompassDirection::Southeast => "southeast",
        };
        f.write_str(s)
    }
}

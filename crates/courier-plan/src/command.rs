//! Turn-by-turn delivery commands.

use std::fmt;

use courier_core::CompassDirection;

/// Which way to turn onto a new street.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
        })
    }
}

/// One instruction in a delivery plan.
///
/// A run of consecutive path segments on the same street collapses into a
/// single `Proceed` whose `miles` is the summed length of the run — two
/// back-to-back `Proceed`s never share a street name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryCommand {
    /// Drive `miles` along `street`, heading `direction`.
    Proceed {
        direction: CompassDirection,
        street: String,
        miles: f64,
    },
    /// Turn onto `street`.
    Turn {
        direction: TurnDirection,
        street: String,
    },
    /// Drop off `item` at the current position.
    Deliver { item: String },
}

impl fmt::Display for DeliveryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryCommand::Proceed {
                direction,
                street,
                miles,
            } => write!(f, "Proceed {direction} on {street} for {miles:.2} miles"),
            DeliveryCommand::Turn { direction, street } => {
                write!(f, "Turn {direction} on {street}")
            }
            DeliveryCommand::Deliver { item } => write!(f, "Deliver {item}"),
        }
    }
}

//! Planning-subsystem error type.

use thiserror::Error;

use courier_core::GeoCoord;

/// Errors produced by routing and planning.
///
/// A failed leg makes the rest of an itinerary meaningless, so planning is
/// all-or-nothing: the first leg failure is returned and no partial plan is
/// produced.
#[derive(Debug, Error)]
pub enum PlanError {
    /// An endpoint has no outgoing street segments in the loaded network.
    #[error("coordinate {0} is not on any street")]
    BadCoordinate(GeoCoord),

    /// The search exhausted every reachable coordinate without finding the
    /// destination.
    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoCoord, to: GeoCoord },
}

pub type PlanResult<T> = Result<T, PlanError>;

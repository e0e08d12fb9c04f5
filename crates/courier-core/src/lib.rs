//! `courier-core` — foundational types for the courier delivery-planning
//! library.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`geo`]     | `GeoCoord`, great-circle distance in miles          |
//! | [`segment`] | `StreetSegment`, line angles                        |
//! | [`compass`] | `CompassDirection` (8-way bearing classification)   |
//! | [`rng`]     | `PlanRng` (seeded, reproducible)                    |
//! | [`error`]   | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod compass;
pub mod error;
pub mod geo;
pub mod rng;
pub mod segment;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compass::CompassDirection;
pub use error::{CoreError, CoreResult};
pub use geo::GeoCoord;
pub use rng::PlanRng;
pub use segment::StreetSegment;

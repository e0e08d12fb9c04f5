//! `courier-plan` — the delivery planning pipeline.
//!
//! Given a loaded street network, a depot, and a set of delivery requests,
//! this crate orders the stops to shorten the tour, routes every leg of the
//! itinerary over real streets, and folds the resulting paths into
//! turn-by-turn delivery commands.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`router`]    | `Router` trait, `Route`, `AStarRouter`                 |
//! | [`optimizer`] | `TourOptimizer`, `AnnealSchedule`, `OptimizedTour`     |
//! | [`planner`]   | `DeliveryPlanner`, `DeliveryPlan`                      |
//! | [`command`]   | `DeliveryCommand`, `TurnDirection`                     |
//! | [`request`]   | `DeliveryRequest`                                      |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Routes itinerary legs on Rayon's thread pool.           |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.      |

pub mod command;
pub mod error;
pub mod optimizer;
pub mod planner;
pub mod request;
pub mod router;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::{DeliveryCommand, TurnDirection};
pub use error::{PlanError, PlanResult};
pub use optimizer::{AnnealSchedule, OptimizedTour, TourOptimizer, crow_tour_miles};
pub use planner::{DeliveryPlan, DeliveryPlanner};
pub use request::DeliveryRequest;
pub use router::{AStarRouter, Route, Router};

//! Full-itinerary planning: optimize the stop order, route every leg, and
//! synthesize turn-by-turn commands.
//!
//! # Leg routing
//!
//! The itinerary is `depot → stop₀ → … → stopₙ₋₁ → depot`.  Legs are
//! independent routing queries against the read-only network; with the
//! `parallel` feature they run on Rayon's thread pool.  Results are
//! inspected in itinerary order either way, so the first failing leg is the
//! one reported, and a single failure aborts the whole plan — no partial
//! command stream is ever returned.
//!
//! # Command synthesis
//!
//! Per leg, each path segment is classified by compass bearing and folded
//! into the command stream: the first segment opens a `Proceed`; a segment
//! continuing on the same street extends the open `Proceed`'s mileage; a
//! street change emits a `Turn` when the swept angle is in `[1°, 359°]`
//! (left below 180°, right at or above) and a fresh `Proceed` either way.
//! Reaching the leg's delivery stop appends a `Deliver` for its item.

use courier_core::{CompassDirection, GeoCoord, PlanRng, StreetSegment};
use courier_map::StreetNetwork;

use crate::command::{DeliveryCommand, TurnDirection};
use crate::error::PlanResult;
use crate::optimizer::TourOptimizer;
use crate::request::DeliveryRequest;
use crate::router::{AStarRouter, Route, Router};

// ── DeliveryPlan ──────────────────────────────────────────────────────────────

/// A complete delivery plan: the full command sequence for the round trip
/// and the total road mileage across all legs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    pub commands: Vec<DeliveryCommand>,
    pub miles: f64,
}

// ── DeliveryPlanner ───────────────────────────────────────────────────────────

/// Plans a full delivery run over a street network.
///
/// Holds a reference to the immutable network plus the routing and
/// optimization strategies.  A fixed seed makes the stop ordering (and
/// therefore the whole plan) reproducible.
pub struct DeliveryPlanner<'a, R: Router = AStarRouter> {
    network: &'a StreetNetwork,
    router: R,
    optimizer: TourOptimizer,
    seed: Option<u64>,
}

impl<'a> DeliveryPlanner<'a> {
    /// A planner with the default A* router and annealing schedule.
    pub fn new(network: &'a StreetNetwork) -> Self {
        Self {
            network,
            router: AStarRouter,
            optimizer: TourOptimizer::new(),
            seed: None,
        }
    }
}

impl<'a, R: Router> DeliveryPlanner<'a, R> {
    /// A planner with a custom routing engine.
    pub fn with_router(network: &'a StreetNetwork, router: R) -> Self {
        Self {
            network,
            router,
            optimizer: TourOptimizer::new(),
            seed: None,
        }
    }

    /// Fix the optimizer's RNG seed for reproducible plans.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Plan the delivery run `depot → requests… → depot`.
    ///
    /// Returns the first leg failure unchanged if any leg cannot be routed.
    pub fn plan(
        &self,
        depot: &GeoCoord,
        requests: &[DeliveryRequest],
    ) -> PlanResult<DeliveryPlan> {
        let mut rng = match self.seed {
            Some(seed) => PlanRng::new(seed),
            None => PlanRng::from_entropy(),
        };
        let tour = self.optimizer.optimize(depot, requests, &mut rng);

        if tour.requests.is_empty() {
            return Ok(DeliveryPlan {
                commands: Vec::new(),
                miles: 0.0,
            });
        }

        let mut points: Vec<&GeoCoord> = Vec::with_capacity(tour.requests.len() + 2);
        points.push(depot);
        points.extend(tour.requests.iter().map(|r| &r.location));
        points.push(depot);

        let routes = self.route_legs(&points)?;

        let mut commands = Vec::new();
        let mut miles = 0.0;
        for (i, route) in routes.iter().enumerate() {
            miles += route.miles;
            // Legs 0..n end at stop i; the final leg returns to the depot.
            synthesize_leg(route, tour.requests.get(i), &mut commands);
        }

        Ok(DeliveryPlan { commands, miles })
    }

    #[cfg(not(feature = "parallel"))]
    fn route_legs(&self, points: &[&GeoCoord]) -> PlanResult<Vec<Route>> {
        points
            .windows(2)
            .map(|leg| self.router.route(self.network, leg[0], leg[1]))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn route_legs(&self, points: &[&GeoCoord]) -> PlanResult<Vec<Route>> {
        use rayon::prelude::*;

        let routed: Vec<PlanResult<Route>> = points
            .par_windows(2)
            .map(|leg| self.router.route(self.network, leg[0], leg[1]))
            .collect();
        // Sequential collect so the itinerary-order first failure wins.
        routed.into_iter().collect()
    }
}

// ── Command synthesis ─────────────────────────────────────────────────────────

/// Fold one leg's path into `commands`, appending a `Deliver` for `stop`
/// (when the leg ends at a delivery stop rather than back at the depot) as
/// soon as its location is reached.
pub(crate) fn synthesize_leg(
    route: &Route,
    stop: Option<&DeliveryRequest>,
    commands: &mut Vec<DeliveryCommand>,
) {
    if route.segments.is_empty() {
        // Zero-length leg (stop at the previous position): deliver in place.
        if let Some(stop) = stop {
            commands.push(DeliveryCommand::Deliver {
                item: stop.item.clone(),
            });
        }
        return;
    }

    let mut prev: Option<&StreetSegment> = None;
    for seg in &route.segments {
        let miles = seg.length_miles();
        match prev {
            // First segment of the leg opens a command run.
            None => commands.push(proceed(seg, miles)),

            // Same street: extend the open Proceed instead of emitting a
            // second one.
            Some(prev_seg) if prev_seg.name == seg.name => {
                if let Some(DeliveryCommand::Proceed { miles: run, .. }) = commands.last_mut() {
                    *run += miles;
                }
            }

            // Street change: emit a Turn when the swept angle demands one,
            // then open a new run.
            Some(prev_seg) => {
                let swept = prev_seg.angle_to(seg);
                if (1.0..=359.0).contains(&swept) {
                    let direction = if swept < 180.0 {
                        TurnDirection::Left
                    } else {
                        TurnDirection::Right
                    };
                    commands.push(DeliveryCommand::Turn {
                        direction,
                        street: seg.name.clone(),
                    });
                }
                commands.push(proceed(seg, miles));
            }
        }

        if let Some(stop) = stop {
            if seg.end == stop.location {
                commands.push(DeliveryCommand::Deliver {
                    item: stop.item.clone(),
                });
            }
        }
        prev = Some(seg);
    }
}

fn proceed(seg: &StreetSegment, miles: f64) -> DeliveryCommand {
    DeliveryCommand::Proceed {
        direction: CompassDirection::from_degrees(seg.angle()),
        street: seg.name.clone(),
        miles,
    }
}

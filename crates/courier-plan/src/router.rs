//! Routing trait and the default A* implementation.
//!
//! # Algorithm
//!
//! Best-first search over the street network with `f = g + h`, where `g` is
//! the accumulated great-circle mileage from the start and `h` is the
//! straight-line mileage to the goal.  Straight-line distance never exceeds
//! road distance, so the heuristic is admissible and the first path found is
//! a shortest one.
//!
//! # Open-set semantics
//!
//! A successor already on the open list suppresses a new admission only when
//! the recorded `f` for that coordinate is strictly better than the new
//! entry's.  Worse or equal entries are left in place rather than updated,
//! so several entries for one coordinate may coexist; a stale entry that is
//! popped later lands in the closed set and its successors are re-examined
//! from the scores recorded at admission time.  This suppression rule (not
//! the textbook decrease-key update) is part of the routing contract — it
//! decides which of two equal-cost paths is reported.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use courier_core::{GeoCoord, StreetSegment};
use courier_map::{BucketIndex, StreetNetwork};

use crate::error::{PlanError, PlanResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: street segments to traverse in order, and
/// the total mileage along them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Segments from start to end; each segment's `end` is the next
    /// segment's `start`.
    pub segments: Vec<StreetSegment>,
    /// Summed segment lengths in miles.
    pub miles: f64,
}

impl Route {
    /// `true` if the start and end coordinates are the same.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable point-to-point routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so independent itinerary legs can
/// be routed concurrently against the shared read-only network.
pub trait Router: Send + Sync {
    /// Compute a drivable path from `start` to `end`.
    ///
    /// # Errors
    ///
    /// [`PlanError::BadCoordinate`] if either endpoint has no outgoing
    /// segments in the network; [`PlanError::NoRoute`] if the endpoints lie
    /// in disconnected components.
    fn route(
        &self,
        network: &StreetNetwork,
        start: &GeoCoord,
        end: &GeoCoord,
    ) -> PlanResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// Default A* search over the coordinate-keyed street network.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(
        &self,
        network: &StreetNetwork,
        start: &GeoCoord,
        end: &GeoCoord,
    ) -> PlanResult<Route> {
        a_star(network, start, end)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Open-set entry ordered by estimated total cost, with the coordinate's
/// text ordering as a deterministic tie-break.
struct OpenEntry {
    f: f64,
    coord: GeoCoord,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.coord.cmp(&other.coord))
    }
}

fn a_star(network: &StreetNetwork, start: &GeoCoord, end: &GeoCoord) -> PlanResult<Route> {
    if network.segments_from(start).is_none() {
        return Err(PlanError::BadCoordinate(start.clone()));
    }
    if network.segments_from(end).is_none() {
        return Err(PlanError::BadCoordinate(end.clone()));
    }
    if start == end {
        return Ok(Route {
            segments: Vec::new(),
            miles: 0.0,
        });
    }

    // Per-invocation bookkeeping, discarded on return.
    let mut g_score: BucketIndex<GeoCoord, f64> = BucketIndex::new();
    let mut f_score: BucketIndex<GeoCoord, f64> = BucketIndex::new();
    // predecessor coordinate + street name used, recorded on first admission
    let mut came_from: BucketIndex<GeoCoord, (GeoCoord, String)> = BucketIndex::new();
    let mut closed: FxHashSet<GeoCoord> = FxHashSet::default();
    let mut open: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();

    open.push(Reverse(OpenEntry {
        f: 0.0,
        coord: start.clone(),
    }));
    g_score.put(start.clone(), 0.0);
    f_score.put(start.clone(), 0.0);

    while let Some(Reverse(entry)) = open.pop() {
        let current = entry.coord;
        closed.insert(current.clone());

        let Some(segments) = network.segments_from(&current) else {
            continue;
        };
        let g_current = g_score.get(&current).copied().unwrap_or(0.0);

        for seg in segments {
            if seg.end == *end {
                if came_from.get(&seg.end).is_none() {
                    came_from.put(seg.end.clone(), (current.clone(), seg.name.clone()));
                }
                return Ok(reconstruct(&came_from, start, end));
            }
            if closed.contains(&seg.end) {
                continue;
            }

            let g_new = g_current + seg.length_miles();
            let f_new = g_new + seg.end.distance_miles(end);

            // Suppress only when an open entry for this coordinate exists
            // with a strictly better recorded f; otherwise admit a duplicate.
            let already_open = open.iter().any(|e| e.0.coord == seg.end);
            if already_open && f_score.get(&seg.end).is_some_and(|old| *old < f_new) {
                continue;
            }

            open.push(Reverse(OpenEntry {
                f: f_new,
                coord: seg.end.clone(),
            }));
            if came_from.get(&seg.end).is_none() {
                came_from.put(seg.end.clone(), (current.clone(), seg.name.clone()));
            }
            f_score.put(seg.end.clone(), f_new);
            g_score.put(seg.end.clone(), g_new);
        }
    }

    Err(PlanError::NoRoute {
        from: start.clone(),
        to: end.clone(),
    })
}

/// Walk predecessor links backward from `end` to `start`, rebuilding the
/// segment sequence in forward order and summing per-edge mileage.
fn reconstruct(
    came_from: &BucketIndex<GeoCoord, (GeoCoord, String)>,
    start: &GeoCoord,
    end: &GeoCoord,
) -> Route {
    let mut segments = Vec::new();
    let mut miles = 0.0;
    let mut current = end.clone();

    while current != *start {
        let Some((prev, street)) = came_from.get(&current) else {
            break;
        };
        miles += prev.distance_miles(&current);
        segments.push(StreetSegment::new(prev.clone(), current.clone(), street.clone()));
        current = prev.clone();
    }

    segments.reverse();
    Route { segments, miles }
}

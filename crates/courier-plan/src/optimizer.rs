//! Stop-order optimization by simulated annealing.
//!
//! # Objective
//!
//! Minimize the crow-flies length of the closed tour
//! `depot → stop₀ → … → stopₙ₋₁ → depot`.  Straight-line distance is a fast
//! proxy for road distance here; the router computes real road mileage per
//! leg afterwards.
//!
//! # Moves and acceptance
//!
//! Each candidate move picks a random contiguous sub-range of the current
//! order and either reverses it in place or relocates it to the tail
//! (preserving the sub-range's internal order).  Moves are accepted by the
//! Metropolis criterion: always when the candidate tour is shorter, and with
//! probability `exp(-Δ/T)` otherwise, so early rounds can climb out of local
//! minima while late (cool) rounds nearly always descend.
//!
//! The best order seen is tracked separately from the current (Metropolis)
//! order, so the result is never worse than the input order.

use courier_core::{GeoCoord, PlanRng};

use crate::request::DeliveryRequest;

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Annealing schedule parameters.
#[derive(Copy, Clone, Debug)]
pub struct AnnealSchedule {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Multiplier applied to the temperature after each round.
    pub cooling: f64,
    /// Maximum number of cooling rounds.
    pub max_rounds: u32,
    /// A round ends early after this many accepted moves.
    pub accepted_per_round: u32,
    /// Candidate moves attempted per round, per stop in the tour.
    pub moves_per_stop: usize,
}

impl Default for AnnealSchedule {
    fn default() -> Self {
        Self {
            initial_temperature: 0.5,
            cooling: 0.9,
            max_rounds: 25,
            accepted_per_round: 10,
            moves_per_stop: 100,
        }
    }
}

// ── OptimizedTour ─────────────────────────────────────────────────────────────

/// The optimizer's result: a permutation of the input requests plus the
/// crow-flies tour lengths before and after, for reporting.
#[derive(Clone, Debug)]
pub struct OptimizedTour {
    pub requests: Vec<DeliveryRequest>,
    pub initial_miles: f64,
    pub optimized_miles: f64,
}

// ── TourOptimizer ─────────────────────────────────────────────────────────────

/// Simulated-annealing stop-order optimizer.
pub struct TourOptimizer {
    pub schedule: AnnealSchedule,
}

impl TourOptimizer {
    pub fn new() -> Self {
        Self {
            schedule: AnnealSchedule::default(),
        }
    }

    pub fn with_schedule(schedule: AnnealSchedule) -> Self {
        Self { schedule }
    }

    /// Reorder `requests` to approximately minimize the closed crow-flies
    /// tour from `depot`.  The input is untouched; the returned order is an
    /// exact permutation of it, and `optimized_miles <= initial_miles`
    /// always holds.
    pub fn optimize(
        &self,
        depot: &GeoCoord,
        requests: &[DeliveryRequest],
        rng: &mut PlanRng,
    ) -> OptimizedTour {
        let initial_miles = crow_tour_miles(depot, requests);
        if requests.len() < 2 {
            return OptimizedTour {
                requests: requests.to_vec(),
                initial_miles,
                optimized_miles: initial_miles,
            };
        }

        let mut current = requests.to_vec();
        let mut current_miles = initial_miles;
        let mut best = current.clone();
        let mut best_miles = current_miles;
        let mut temperature = self.schedule.initial_temperature;

        for _ in 0..self.schedule.max_rounds {
            let mut accepted = 0u32;
            for _ in 0..self.schedule.moves_per_stop * current.len() {
                if accepted >= self.schedule.accepted_per_round {
                    break;
                }

                let candidate = neighbor(&current, rng);
                let candidate_miles = crow_tour_miles(depot, &candidate);

                if accept(candidate_miles, current_miles, temperature, rng) {
                    current = candidate;
                    current_miles = candidate_miles;
                    accepted += 1;

                    if current_miles < best_miles {
                        best = current.clone();
                        best_miles = current_miles;
                    }
                }
            }

            temperature *= self.schedule.cooling;
            if accepted == 0 {
                break; // frozen: nothing accepted this round
            }
        }

        OptimizedTour {
            requests: best,
            initial_miles,
            optimized_miles: best_miles,
        }
    }
}

impl Default for TourOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Produce one candidate order: reverse a random sub-range, or relocate it
/// to the tail keeping its internal order.
fn neighbor(order: &[DeliveryRequest], rng: &mut PlanRng) -> Vec<DeliveryRequest> {
    let mut candidate = order.to_vec();
    let i = rng.gen_range(0..candidate.len());
    let j = rng.gen_range(i..candidate.len());

    if rng.gen_bool(0.5) {
        candidate[i..=j].reverse();
    } else {
        let moved: Vec<DeliveryRequest> = candidate.drain(i..=j).collect();
        candidate.extend(moved);
    }
    candidate
}

/// Metropolis acceptance: improving moves always, worsening moves with
/// probability `exp(-Δ/T)` against a uniform draw in `[0, 1)`.
fn accept(candidate_miles: f64, current_miles: f64, temperature: f64, rng: &mut PlanRng) -> bool {
    if candidate_miles < current_miles {
        return true;
    }
    let draw: f64 = rng.random();
    (-(candidate_miles - current_miles) / temperature).exp() > draw
}

/// Crow-flies length of the closed tour `depot → stops… → depot`.
pub fn crow_tour_miles(depot: &GeoCoord, stops: &[DeliveryRequest]) -> f64 {
    let mut miles = 0.0;
    let mut prev = depot;
    for stop in stops {
        miles += prev.distance_miles(&stop.location);
        prev = &stop.location;
    }
    miles + prev.distance_miles(depot)
}

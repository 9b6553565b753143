//! Immutable per-tick view of the simulation, handed to report consumers

use super::route::RouteState;
use super::types::{Passenger, Route, VehicleStatus};

/// State of one route at the end of a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSnapshot {
    pub route: Route,
    /// Waiting passengers, head first
    pub queue: Vec<Passenger>,
    pub boarding: Option<Passenger>,
    pub capacity_remaining: u32,
    pub onboard_count: u32,
    pub status: VehicleStatus,
}

impl RouteSnapshot {
    pub fn capture(state: &RouteState) -> Self {
        Self {
            route: state.route,
            queue: state.queue().copied().collect(),
            boarding: state.boarding_passenger().copied(),
            capacity_remaining: state.capacity_remaining(),
            onboard_count: state.onboard_count(),
            status: state.status(),
        }
    }
}

/// Everything observable about a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSnapshot {
    pub tick: u32,
    /// Passengers taken from the feed this tick, including dropped ones
    pub arrivals: Vec<Passenger>,
    /// One entry per route, in [`Route::ALL`] order
    pub routes: [RouteSnapshot; 3],
}

impl TickSnapshot {
    pub fn route(&self, route: Route) -> &RouteSnapshot {
        &self.routes[route.index()]
    }
}

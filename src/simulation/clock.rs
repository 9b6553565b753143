//! Simulation clock that ties the dispatcher and routes together
//!
//! This is the entry point for running a boarding simulation. Each tick:
//! dispatch arrivals, advance every route, capture a snapshot, then check
//! whether the run is over.

use log::{debug, info, warn};

use super::config::SimConfig;
use super::dispatcher::ArrivalDispatcher;
use super::route::RouteState;
use super::snapshot::{RouteSnapshot, TickSnapshot};
use super::types::{Passenger, Route};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimOutcome {
    /// Feed consumed, queues empty and nobody boarding, as of `tick`
    Completed { tick: u32 },
    /// Work remained after `ticks` ticks and the run was cut off
    SafetyBound { ticks: u32 },
}

/// Result of [`Simulation::run`]
#[derive(Debug, Clone)]
pub struct SimReport {
    pub outcome: SimOutcome,
    pub snapshots: Vec<TickSnapshot>,
    /// Passengers dropped for an unrecognized route tag
    pub dropped: usize,
}

/// The whole simulation state: feed, cursor, routes and the tick counter
pub struct Simulation {
    feed: Vec<Passenger>,
    config: SimConfig,
    dispatcher: ArrivalDispatcher,
    /// One state per route, in [`Route::ALL`] order
    routes: [RouteState; 3],
    /// Next tick to run
    tick: u32,
}

impl Simulation {
    /// Create a simulation over `feed`, which must be sorted by arrival tick
    pub fn new(feed: Vec<Passenger>, config: SimConfig) -> Self {
        debug!(
            "Starting simulation: {} passengers, capacity {}, tick ceiling {}",
            feed.len(),
            config.capacity,
            config.max_ticks
        );
        Self {
            feed,
            config,
            dispatcher: ArrivalDispatcher::new(),
            routes: Route::ALL.map(|route| RouteState::new(route, config.capacity)),
            tick: 0,
        }
    }

    /// Run a single tick and return its snapshot
    pub fn step(&mut self) -> TickSnapshot {
        let tick = self.tick;
        let arrivals = self
            .dispatcher
            .dispatch(tick, &self.feed, &mut self.routes);

        for state in &mut self.routes {
            state.advance(tick);
        }

        self.tick += 1;

        TickSnapshot {
            tick,
            arrivals,
            routes: [
                RouteSnapshot::capture(&self.routes[0]),
                RouteSnapshot::capture(&self.routes[1]),
                RouteSnapshot::capture(&self.routes[2]),
            ],
        }
    }

    /// All work is done: feed consumed, every queue empty, nobody boarding
    ///
    /// Vehicles may still be sitting partly filled; that doesn't keep the
    /// run alive.
    pub fn is_complete(&self) -> bool {
        self.dispatcher.is_exhausted(&self.feed) && self.routes.iter().all(RouteState::is_idle)
    }

    /// Run ticks until the work is done or the tick ceiling is reached,
    /// handing each snapshot to `on_tick` as it's produced
    pub fn run_with<F>(&mut self, mut on_tick: F) -> SimOutcome
    where
        F: FnMut(&TickSnapshot),
    {
        loop {
            let snapshot = self.step();
            on_tick(&snapshot);

            if self.is_complete() {
                info!("Simulation complete at tick {}", snapshot.tick);
                return SimOutcome::Completed {
                    tick: snapshot.tick,
                };
            }

            if self.tick >= self.config.max_ticks {
                warn!(
                    "Simulation stopped after {} ticks with work remaining ({} passengers not yet dispatched)",
                    self.tick,
                    self.feed.len() - self.dispatcher.cursor()
                );
                return SimOutcome::SafetyBound { ticks: self.tick };
            }
        }
    }

    /// Run to the end and collect every snapshot
    pub fn run(mut self) -> SimReport {
        let mut snapshots = Vec::new();
        let outcome = self.run_with(|snapshot| snapshots.push(snapshot.clone()));
        SimReport {
            outcome,
            snapshots,
            dropped: self.dispatcher.dropped(),
        }
    }

    pub fn route(&self, route: Route) -> &RouteState {
        &self.routes[route.index()]
    }

    pub fn routes(&self) -> &[RouteState] {
        &self.routes
    }

    /// Number of ticks run so far
    pub fn ticks_run(&self) -> u32 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &ArrivalDispatcher {
        &self.dispatcher
    }
}

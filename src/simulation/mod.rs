//! Standalone boarding simulation module
//!
//! This module contains the core queueing and boarding logic. It does no I/O:
//! passengers come in as an ordered slice and every tick comes out as a
//! [`TickSnapshot`].

mod clock;
mod config;
mod dispatcher;
mod route;
mod snapshot;
mod types;

pub use clock::{SimOutcome, SimReport, Simulation};
pub use config::SimConfig;
pub use dispatcher::ArrivalDispatcher;
pub use route::RouteState;
pub use snapshot::{RouteSnapshot, TickSnapshot};
pub use types::{Passenger, Route, RouteTag, VehicleStatus, MAX_TICKS, VEHICLE_CAPACITY};

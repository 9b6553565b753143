//! Core types for the boarding simulation

use std::fmt;

/// Number of passengers a vehicle holds before it departs
pub const VEHICLE_CAPACITY: u32 = 5;

/// Number of ticks after which a run is stopped even if work remains
pub const MAX_TICKS: u32 = 1000;

/// One of the three independent routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Short-distance route
    Short,
    /// Long-distance route
    Long,
    /// City route
    City,
}

impl Route {
    /// All routes, in the order the clock advances them
    pub const ALL: [Route; 3] = [Route::Short, Route::Long, Route::City];

    /// Single-character code used in feeds and reports
    pub fn code(self) -> char {
        match self {
            Route::Short => 'S',
            Route::Long => 'L',
            Route::City => 'C',
        }
    }

    pub fn from_code(code: char) -> Option<Route> {
        match code {
            'S' => Some(Route::Short),
            'L' => Some(Route::Long),
            'C' => Some(Route::City),
            _ => None,
        }
    }

    /// Position of this route in [`Route::ALL`]
    pub fn index(self) -> usize {
        match self {
            Route::Short => 0,
            Route::Long => 1,
            Route::City => 2,
        }
    }
}

/// The route tag as carried on a passenger record
///
/// Tags that don't name a known route still travel through the feed so the
/// dispatcher can drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteTag {
    Known(Route),
    Unrecognized(char),
}

impl RouteTag {
    pub fn from_code(code: char) -> Self {
        match Route::from_code(code) {
            Some(route) => RouteTag::Known(route),
            None => RouteTag::Unrecognized(code),
        }
    }

    pub fn route(self) -> Option<Route> {
        match self {
            RouteTag::Known(route) => Some(route),
            RouteTag::Unrecognized(_) => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            RouteTag::Known(route) => route.code(),
            RouteTag::Unrecognized(code) => code,
        }
    }
}

impl From<Route> for RouteTag {
    fn from(route: Route) -> Self {
        RouteTag::Known(route)
    }
}

/// A passenger waiting to board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    pub tag: RouteTag,
    /// Ticks spent boarding once dequeued
    pub boarding_duration: u32,
    /// Tick at which the passenger joins its route's queue
    pub arrival_tick: u32,
}

impl Passenger {
    pub fn new(tag: impl Into<RouteTag>, boarding_duration: u32, arrival_tick: u32) -> Self {
        Self {
            tag: tag.into(),
            boarding_duration,
            arrival_tick,
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.tag.code(), self.boarding_duration)
    }
}

/// Status of a route's vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleStatus {
    /// Empty or reset, nobody has finished boarding since the last departure
    #[default]
    Waiting,
    /// At least one passenger has finished boarding
    Board,
    /// Full; the vehicle left this tick and resets on the next one
    Departed,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleStatus::Waiting => "Waiting",
            VehicleStatus::Board => "Board",
            VehicleStatus::Departed => "Departed",
        };
        f.pad(label)
    }
}

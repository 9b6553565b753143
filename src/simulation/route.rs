//! Per-route boarding state machine
//!
//! Each route owns a FIFO queue and a single vehicle. Every tick the clock
//! calls [`RouteState::advance`], which runs three steps in a fixed order:
//!
//! 1. [`RouteState::reset_if_departed`]
//! 2. [`RouteState::advance_boarding`]
//! 3. [`RouteState::start_next_boarding`]
//!
//! Departure is triggered only by the vehicle filling up. A route whose queue
//! runs dry holds a partly filled vehicle for as long as the run lasts.

use log::{debug, trace};
use std::collections::VecDeque;

use super::types::{Passenger, Route, VehicleStatus};

/// The passenger currently boarding and the ticks left until they're seated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Boarding {
    passenger: Passenger,
    remaining: u32,
}

/// Mutable state of one route
#[derive(Debug, Clone)]
pub struct RouteState {
    pub route: Route,
    capacity: u32,
    queue: VecDeque<Passenger>,
    boarding: Option<Boarding>,
    onboard: Vec<Passenger>,
    capacity_remaining: u32,
    status: VehicleStatus,
}

impl RouteState {
    pub fn new(route: Route, capacity: u32) -> Self {
        Self {
            route,
            capacity,
            queue: VecDeque::new(),
            boarding: None,
            onboard: Vec::new(),
            capacity_remaining: capacity,
            status: VehicleStatus::Waiting,
        }
    }

    /// Add a passenger to the back of the queue
    pub fn enqueue(&mut self, passenger: Passenger) {
        self.queue.push_back(passenger);
    }

    /// Run one tick: reset, then advance boarding, then start the next boarder
    pub fn advance(&mut self, tick: u32) {
        self.reset_if_departed(tick);
        self.advance_boarding(tick);
        self.start_next_boarding(tick);
    }

    /// A vehicle that departed last tick comes back empty
    ///
    /// Returns true if a reset happened.
    pub fn reset_if_departed(&mut self, tick: u32) -> bool {
        match self.status {
            VehicleStatus::Departed => {
                trace!(
                    "tick {}: route {:?} vehicle returns empty",
                    tick,
                    self.route
                );
                self.onboard.clear();
                self.capacity_remaining = self.capacity;
                self.status = VehicleStatus::Waiting;
                true
            }
            VehicleStatus::Waiting | VehicleStatus::Board => false,
        }
    }

    /// Count down the current boarder and seat them when the timer runs out
    ///
    /// Returns the passenger who finished boarding this tick, if any.
    pub fn advance_boarding(&mut self, tick: u32) -> Option<Passenger> {
        let boarding = self.boarding.as_mut()?;
        boarding.remaining = boarding.remaining.saturating_sub(1);
        if boarding.remaining > 0 {
            return None;
        }

        let passenger = boarding.passenger;
        self.boarding = None;
        self.onboard.push(passenger);
        self.capacity_remaining -= 1;
        self.status = VehicleStatus::Board;

        if self.capacity_remaining == 0 {
            self.status = VehicleStatus::Departed;
            debug!(
                "tick {}: route {:?} departs with {} passengers",
                tick,
                self.route,
                self.onboard.len()
            );
        } else {
            trace!(
                "tick {}: {} boarded route {:?}, {} seats left",
                tick,
                passenger,
                self.route,
                self.capacity_remaining
            );
        }

        Some(passenger)
    }

    /// Take the head of the queue as the new boarder if the vehicle has room
    ///
    /// The timer is only decremented from the next tick on, so a passenger
    /// with duration `d` is seated `d` ticks after this call.
    pub fn start_next_boarding(&mut self, tick: u32) -> Option<Passenger> {
        if self.boarding.is_some()
            || self.capacity_remaining == 0
            || self.status == VehicleStatus::Departed
        {
            return None;
        }

        let passenger = self.queue.pop_front()?;
        trace!(
            "tick {}: {} starts boarding route {:?}",
            tick,
            passenger,
            self.route
        );
        self.boarding = Some(Boarding {
            passenger,
            remaining: passenger.boarding_duration,
        });
        Some(passenger)
    }

    pub fn queue(&self) -> impl ExactSizeIterator<Item = &Passenger> {
        self.queue.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn boarding_passenger(&self) -> Option<&Passenger> {
        self.boarding.as_ref().map(|b| &b.passenger)
    }

    /// Ticks left before the current boarder is seated (0 if nobody is boarding)
    pub fn boarding_timer(&self) -> u32 {
        self.boarding.map_or(0, |b| b.remaining)
    }

    pub fn is_boarding(&self) -> bool {
        self.boarding.is_some()
    }

    pub fn onboard(&self) -> &[Passenger] {
        &self.onboard
    }

    pub fn onboard_count(&self) -> u32 {
        self.onboard.len() as u32
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn capacity_remaining(&self) -> u32 {
        self.capacity_remaining
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Nothing queued and nobody mid-boarding
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.boarding.is_none()
    }
}

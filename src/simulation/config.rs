//! Run configuration for the boarding simulation

use anyhow::{bail, Result};

use super::types::{MAX_TICKS, VEHICLE_CAPACITY};

/// Parameters fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Passengers per vehicle; a vehicle departs as soon as it holds this many
    pub capacity: u32,
    /// Tick ceiling after which the run is stopped
    pub max_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: VEHICLE_CAPACITY,
            max_ticks: MAX_TICKS,
        }
    }
}

impl SimConfig {
    pub fn new(capacity: u32, max_ticks: u32) -> Self {
        Self {
            capacity,
            max_ticks,
        }
    }

    /// Reject configurations the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            bail!("Vehicle capacity must be at least 1");
        }
        if self.max_ticks == 0 {
            bail!("Tick ceiling must be at least 1");
        }
        Ok(())
    }
}

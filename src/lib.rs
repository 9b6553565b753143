//! Boarding Simulation Library
//!
//! A tick-driven simulation of passengers boarding capacity-limited shared
//! vehicles on three independent routes.

pub mod feed;
pub mod report;
pub mod simulation;

//! Test fixtures for dispatch-planner.
//!
//! Real Raleigh-area locations and builders for the input tables.

pub mod raleigh_locations;

pub use raleigh_locations::*;

//! dispatch-planner core
//!
//! Assigns technicians to a week of service jobs and orders each
//! technician's daily jobs into a short depot round trip.

pub mod error;
pub mod config;
pub mod models;
pub mod traits;
pub mod haversine;
pub mod matrix;
pub mod solver;
pub mod assigner;
pub mod orchestrator;
pub mod table;
pub mod planner;

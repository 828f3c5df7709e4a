//! Error taxonomy for the planner.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("malformed row: {0}")]
    MalformedInput(String),
    #[error("technician roster is empty")]
    EmptyRoster,
    #[error("route has {stops} stops, limit is {limit}")]
    RouteTooLarge { stops: usize, limit: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

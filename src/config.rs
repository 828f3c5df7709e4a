//! Planner configuration.

use serde::Deserialize;

use crate::error::{PlannerError, Result};
use crate::models::{Coordinate, DEFAULT_DEPOT};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Start and end of every technician's daily route.
    pub depot: Coordinate,
    /// Seed for the assignment run's random generator.
    pub seed: u64,
    /// Maximum jobs a technician takes on one day.
    pub daily_capacity: usize,
    /// Jobs per slot a technician takes before the remainder pass.
    pub slot_quota: usize,
    /// Largest group the route solver will accept.
    pub max_route_stops: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT,
            seed: 42,
            daily_capacity: 4,
            slot_quota: 2,
            max_route_stops: 64,
        }
    }
}

impl PlannerOptions {
    pub fn with_depot(mut self, latitude: f64, longitude: f64) -> Self {
        self.depot = Coordinate::new(latitude, longitude);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.daily_capacity == 0 {
            return Err(PlannerError::InvalidConfig("daily_capacity must be positive".into()));
        }
        if self.slot_quota == 0 {
            return Err(PlannerError::InvalidConfig("slot_quota must be positive".into()));
        }
        if self.slot_quota * 2 > self.daily_capacity {
            return Err(PlannerError::InvalidConfig(format!(
                "slot_quota {} does not fit twice into daily_capacity {}",
                self.slot_quota, self.daily_capacity
            )));
        }
        if self.max_route_stops == 0 {
            return Err(PlannerError::InvalidConfig("max_route_stops must be positive".into()));
        }
        self.depot
            .validate()
            .map_err(|err| PlannerError::InvalidConfig(format!("depot: {err}")))
    }
}

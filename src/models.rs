//! Domain types shared by the assigner and the route optimizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Depot used when the caller does not configure one (Raleigh, NC).
pub const DEFAULT_DEPOT: Coordinate = Coordinate::new(35.780175, -78.633199);

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Rejects non-finite values and anything outside [-90, 90] x [-180, 180].
    pub fn validate(&self) -> Result<()> {
        let lat_ok = self.latitude.is_finite() && self.latitude.abs() <= 90.0;
        let lng_ok = self.longitude.is_finite() && self.longitude.abs() <= 180.0;
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(PlannerError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechnicianId(pub String);

impl TechnicianId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TechnicianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Day of the service week. Ordering follows the calendar, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];
}

/// Half-day bucket within a day's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    Morning,
    Afternoon,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Morning, Slot::Afternoon];

    pub fn index(self) -> usize {
        match self {
            Slot::Morning => 0,
            Slot::Afternoon => 1,
        }
    }
}

/// A scheduled customer visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub customer_id: CustomerId,
    pub day: Day,
    pub slot: Slot,
    pub job_type: String,
    pub location: Coordinate,
    pub expected_revenue: Option<f64>,
}

impl Job {
    pub fn new(
        customer_id: impl Into<String>,
        day: Day,
        slot: Slot,
        job_type: impl Into<String>,
        location: Coordinate,
    ) -> Self {
        Self {
            customer_id: CustomerId::new(customer_id),
            day,
            slot,
            job_type: job_type.into(),
            location,
            expected_revenue: None,
        }
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.expected_revenue = Some(revenue);
        self
    }
}

/// A job annotated with the technician it was given to.
///
/// `technician == None` means the job could not be placed under the
/// capacity and slot rules; callers must surface it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub job: Job,
    pub technician: Option<TechnicianId>,
}

impl Assignment {
    pub fn is_assigned(&self) -> bool {
        self.technician.is_some()
    }
}

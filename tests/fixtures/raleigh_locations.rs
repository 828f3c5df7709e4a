//! Raleigh / Wake County locations for realistic test fixtures.
#![allow(dead_code)]

use dispatch_planner::models::{Coordinate, Day, Slot};
use dispatch_planner::table::{CustomerRow, ScheduleRow, TechnicianRow};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

pub const CUSTOMERS: &[Location] = &[
    Location::new("Oakwood", 35.7880, -78.6290),
    Location::new("Five Points", 35.8030, -78.6440),
    Location::new("Cameron Village", 35.7900, -78.6580),
    Location::new("Boylan Heights", 35.7740, -78.6480),
    Location::new("Mordecai", 35.7950, -78.6320),
    Location::new("Glenwood South", 35.7880, -78.6460),
    Location::new("Warehouse District", 35.7750, -78.6450),
    Location::new("Historic Oakwood East", 35.7860, -78.6200),
    Location::new("Hayes Barton", 35.8080, -78.6500),
    Location::new("Mordecai North", 35.8010, -78.6280),
    Location::new("Dix Park", 35.7680, -78.6600),
    Location::new("South Park", 35.7680, -78.6330),
    Location::new("Pullen Park", 35.7790, -78.6640),
    Location::new("Capitol", 35.7804, -78.6391),
    Location::new("City Market", 35.7760, -78.6360),
    Location::new("Brookside", 35.7940, -78.6240),
];

pub fn customer_rows() -> Vec<CustomerRow> {
    CUSTOMERS
        .iter()
        .map(|loc| CustomerRow {
            customer_id: Some(loc.name.to_string()),
            latitude: Some(loc.lat),
            longitude: Some(loc.lng),
        })
        .collect()
}

pub fn technician_rows(ids: &[&str]) -> Vec<TechnicianRow> {
    ids.iter()
        .map(|id| TechnicianRow {
            technician_id: Some(id.to_string()),
        })
        .collect()
}

pub fn schedule_row(customer: &str, day: Day, slot: Slot) -> ScheduleRow {
    ScheduleRow {
        customer_id: Some(customer.to_string()),
        day: Some(day),
        slot: Some(slot),
        job_type: Some("service".to_string()),
        expected_revenue: Some(120.0),
    }
}

/// Half the customers in the morning, half in the afternoon, every weekday.
pub fn full_week() -> Vec<ScheduleRow> {
    let mut rows = Vec::new();
    for day in Day::WEEKDAYS {
        for (i, loc) in CUSTOMERS.iter().enumerate() {
            let slot = if i % 2 == 0 { Slot::Morning } else { Slot::Afternoon };
            rows.push(schedule_row(loc.name, day, slot));
        }
    }
    rows
}

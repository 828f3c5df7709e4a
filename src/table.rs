//! Boundary rows exchanged with the storage layer, and the join that turns
//! them into jobs.
//!
//! Every field is optional on input; rows missing something the planner
//! needs are rejected individually instead of failing the batch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PlannerError;
use crate::models::{Coordinate, CustomerId, Day, Job, Slot, TechnicianId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub customer_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicianRow {
    pub technician_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub customer_id: Option<String>,
    pub day: Option<Day>,
    pub slot: Option<Slot>,
    pub job_type: Option<String>,
    pub expected_revenue: Option<f64>,
}

/// Which input table a rejected row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableKind {
    Customer,
    Technician,
    Schedule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    pub table: TableKind,
    /// Zero-based position in the input table.
    pub row: usize,
    pub reason: PlannerError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinedJobs {
    pub jobs: Vec<Job>,
    pub rejected: Vec<RejectedRow>,
}

fn missing(field: &str) -> PlannerError {
    PlannerError::MalformedInput(format!("missing {field}"))
}

fn reject(table: TableKind, row: usize, reason: PlannerError) -> RejectedRow {
    warn!(?table, row, %reason, "row rejected");
    RejectedRow { table, row, reason }
}

fn customer_location(row: &CustomerRow) -> Result<(CustomerId, Coordinate), PlannerError> {
    let id = row.customer_id.as_deref().ok_or_else(|| missing("customer_id"))?;
    let latitude = row.latitude.ok_or_else(|| missing("latitude"))?;
    let longitude = row.longitude.ok_or_else(|| missing("longitude"))?;
    let location = Coordinate::new(latitude, longitude);
    location.validate()?;
    Ok((CustomerId::new(id), location))
}

fn schedule_job(
    row: &ScheduleRow,
    locations: &HashMap<CustomerId, Coordinate>,
) -> Result<Job, PlannerError> {
    let id = row.customer_id.as_deref().ok_or_else(|| missing("customer_id"))?;
    let day = row.day.ok_or_else(|| missing("day"))?;
    let slot = row.slot.ok_or_else(|| missing("slot"))?;
    let job_type = row.job_type.as_deref().ok_or_else(|| missing("job_type"))?;
    let customer_id = CustomerId::new(id);
    let location = *locations
        .get(&customer_id)
        .ok_or_else(|| PlannerError::MalformedInput(format!("unknown customer {customer_id}")))?;

    Ok(Job {
        customer_id,
        day,
        slot,
        job_type: job_type.to_string(),
        location,
        expected_revenue: row.expected_revenue,
    })
}

/// Joins schedule rows with customer coordinates.
///
/// Customer rows that are incomplete, out of range or duplicated are
/// rejected, and so is every schedule row referring to a customer without a
/// usable location. Job order follows the schedule table.
pub fn join_jobs(schedule: &[ScheduleRow], customers: &[CustomerRow]) -> JoinedJobs {
    let mut joined = JoinedJobs::default();
    let mut locations: HashMap<CustomerId, Coordinate> = HashMap::with_capacity(customers.len());

    for (row, customer) in customers.iter().enumerate() {
        match customer_location(customer) {
            Ok((id, location)) => {
                if locations.contains_key(&id) {
                    let reason = PlannerError::MalformedInput(format!("duplicate customer {id}"));
                    joined.rejected.push(reject(TableKind::Customer, row, reason));
                } else {
                    locations.insert(id, location);
                }
            }
            Err(reason) => joined.rejected.push(reject(TableKind::Customer, row, reason)),
        }
    }

    for (row, scheduled) in schedule.iter().enumerate() {
        match schedule_job(scheduled, &locations) {
            Ok(job) => joined.jobs.push(job),
            Err(reason) => joined.rejected.push(reject(TableKind::Schedule, row, reason)),
        }
    }

    joined
}

/// Collects technician identifiers, rejecting rows without one.
pub fn roster(technicians: &[TechnicianRow]) -> (Vec<TechnicianId>, Vec<RejectedRow>) {
    let mut ids = Vec::with_capacity(technicians.len());
    let mut rejected = Vec::new();
    for (row, technician) in technicians.iter().enumerate() {
        match technician.technician_id.as_deref() {
            Some(id) if !id.trim().is_empty() => ids.push(TechnicianId::new(id)),
            _ => rejected.push(reject(TableKind::Technician, row, missing("technician_id"))),
        }
    }
    (ids, rejected)
}

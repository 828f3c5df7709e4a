//! Per-(technician, day) route optimization.
//!
//! Groups assigned jobs, builds a depot-first distance matrix for each group
//! and compares the as-assigned order with the nearest-neighbor order.
//! Groups share nothing, so they are solved in parallel.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::PlannerOptions;
use crate::error::{PlannerError, Result};
use crate::haversine::HaversineMatrix;
use crate::models::{Assignment, Coordinate, CustomerId, Day, Job, TechnicianId};
use crate::solver::nearest_neighbor;
use crate::traits::DistanceMatrixProvider;

/// Depot index in every group matrix.
const DEPOT: usize = 0;

/// The optimized route for one technician on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRoute {
    pub day: Day,
    pub technician: TechnicianId,
    /// Jobs in assignment order (the baseline route).
    pub jobs: Vec<Job>,
    /// Visitation order as indices into `jobs`.
    pub order: Vec<usize>,
    pub original_distance: f64,
    pub optimized_distance: f64,
}

impl GroupRoute {
    pub fn improvement(&self) -> f64 {
        self.original_distance - self.optimized_distance
    }

    /// Improvement as a percentage of the original distance.
    pub fn improvement_pct(&self) -> f64 {
        if self.original_distance > 0.0 {
            self.improvement() / self.original_distance * 100.0
        } else {
            0.0
        }
    }

    /// Sum of expected revenue; `None` when no job carries one.
    pub fn expected_revenue(&self) -> Option<f64> {
        self.jobs
            .iter()
            .filter_map(|job| job.expected_revenue)
            .fold(None, |acc: Option<f64>, r| Some(acc.unwrap_or(0.0) + r))
    }

    pub fn optimized_customers(&self) -> Vec<&CustomerId> {
        self.order.iter().map(|&i| &self.jobs[i].customer_id).collect()
    }
}

/// A group whose route could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedGroup {
    pub day: Day,
    pub technician: TechnicianId,
    pub reason: PlannerError,
}

/// One row of the output comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteComparisonRow {
    pub day: Day,
    pub technician_id: TechnicianId,
    pub expected_revenue: Option<f64>,
    pub original_distance: f64,
    pub optimized_distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutingReport {
    /// Routes sorted by (day, technician).
    pub routes: Vec<GroupRoute>,
    pub failed: Vec<FailedGroup>,
    /// Assignments without a technician, excluded from routing.
    pub unassigned_jobs: usize,
}

impl RoutingReport {
    pub fn comparison_rows(&self) -> Vec<RouteComparisonRow> {
        self.routes
            .iter()
            .map(|route| RouteComparisonRow {
                day: route.day,
                technician_id: route.technician.clone(),
                expected_revenue: route.expected_revenue(),
                original_distance: route.original_distance,
                optimized_distance: route.optimized_distance,
            })
            .collect()
    }

    pub fn total_original_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.original_distance).sum()
    }

    pub fn total_optimized_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.optimized_distance).sum()
    }
}

/// Route optimizer over a pluggable distance source.
#[derive(Debug, Clone)]
pub struct RouteOptimizer<M> {
    provider: M,
    depot: Coordinate,
    max_route_stops: usize,
}

impl RouteOptimizer<HaversineMatrix> {
    pub fn haversine(options: &PlannerOptions) -> Self {
        Self::new(HaversineMatrix::default(), options)
    }
}

impl<M> RouteOptimizer<M>
where
    M: DistanceMatrixProvider + Sync,
{
    pub fn new(provider: M, options: &PlannerOptions) -> Self {
        Self {
            provider,
            depot: options.depot,
            max_route_stops: options.max_route_stops,
        }
    }

    pub fn optimize_routes(&self, assignments: &[Assignment]) -> RoutingReport {
        let mut groups: BTreeMap<(Day, &TechnicianId), Vec<&Job>> = BTreeMap::new();
        let mut unassigned_jobs = 0;
        for assignment in assignments {
            match &assignment.technician {
                Some(technician) => groups
                    .entry((assignment.job.day, technician))
                    .or_default()
                    .push(&assignment.job),
                None => unassigned_jobs += 1,
            }
        }
        if unassigned_jobs > 0 {
            warn!(unassigned_jobs, "unassigned jobs excluded from routing");
        }

        let groups: Vec<_> = groups.into_iter().filter(|(_, jobs)| !jobs.is_empty()).collect();
        info!(groups = groups.len(), "optimizing routes");

        let results: Vec<_> = groups
            .par_iter()
            .map(|((day, technician), jobs)| {
                self.route_group(jobs).map(|(order, original_distance, optimized_distance)| {
                    GroupRoute {
                        day: *day,
                        technician: (*technician).clone(),
                        jobs: jobs.iter().map(|job| (*job).clone()).collect(),
                        order,
                        original_distance,
                        optimized_distance,
                    }
                })
            })
            .collect();

        let mut report = RoutingReport {
            unassigned_jobs,
            ..RoutingReport::default()
        };
        for (((day, technician), _), result) in groups.iter().zip(results) {
            match result {
                Ok(route) => {
                    debug!(
                        ?day,
                        technician = %technician,
                        original = route.original_distance,
                        optimized = route.optimized_distance,
                        "route optimized"
                    );
                    report.routes.push(route);
                }
                Err(reason) => {
                    warn!(?day, technician = %technician, %reason, "route failed");
                    report.failed.push(FailedGroup {
                        day: *day,
                        technician: (*technician).clone(),
                        reason,
                    });
                }
            }
        }

        info!(
            routes = report.routes.len(),
            failed = report.failed.len(),
            original = report.total_original_distance(),
            optimized = report.total_optimized_distance(),
            "routing complete"
        );
        report
    }

    /// Returns (order into `jobs`, original distance, optimized distance).
    fn route_group(&self, jobs: &[&Job]) -> Result<(Vec<usize>, f64, f64)> {
        if jobs.len() > self.max_route_stops {
            return Err(PlannerError::RouteTooLarge {
                stops: jobs.len(),
                limit: self.max_route_stops,
            });
        }

        let mut locations = Vec::with_capacity(jobs.len() + 1);
        locations.push(self.depot);
        locations.extend(jobs.iter().map(|job| job.location));
        let matrix = self.provider.matrix_for(&locations)?;
        if matrix.size() != locations.len() {
            return Err(PlannerError::InvalidInput(format!(
                "provider returned a {0}x{0} matrix for {1} locations",
                matrix.size(),
                locations.len()
            )));
        }

        let baseline: Vec<usize> = (1..locations.len()).collect();
        let original_distance = matrix.tour_length(DEPOT, &baseline);
        let tour = nearest_neighbor(&matrix, DEPOT)?;

        let order = tour.order.iter().map(|&i| i - 1).collect();
        Ok((order, original_distance, tour.total_distance))
    }
}

/// Optimizes routes with haversine distances and the configured depot.
pub fn optimize_routes(assignments: &[Assignment], options: &PlannerOptions) -> RoutingReport {
    RouteOptimizer::haversine(options).optimize_routes(assignments)
}

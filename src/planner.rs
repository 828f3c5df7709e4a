//! End-to-end weekly planning: join, assign, route.

use tracing::info;

use crate::assigner::assign_seeded;
use crate::config::PlannerOptions;
use crate::error::Result;
use crate::models::Assignment;
use crate::orchestrator::{RoutingReport, optimize_routes};
use crate::table::{CustomerRow, RejectedRow, ScheduleRow, TechnicianRow, join_jobs, roster};

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlan {
    pub assignments: Vec<Assignment>,
    pub routing: RoutingReport,
    pub rejected_rows: Vec<RejectedRow>,
}

/// Headline numbers for a weekly plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub routes: usize,
    pub failed_routes: usize,
    pub unassigned_jobs: usize,
    pub rejected_rows: usize,
    pub original_distance: f64,
    pub optimized_distance: f64,
}

impl PlanSummary {
    pub fn improvement_pct(&self) -> f64 {
        if self.original_distance > 0.0 {
            (self.original_distance - self.optimized_distance) / self.original_distance * 100.0
        } else {
            0.0
        }
    }
}

impl WeeklyPlan {
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            routes: self.routing.routes.len(),
            failed_routes: self.routing.failed.len(),
            unassigned_jobs: self.routing.unassigned_jobs,
            rejected_rows: self.rejected_rows.len(),
            original_distance: self.routing.total_original_distance(),
            optimized_distance: self.routing.total_optimized_distance(),
        }
    }
}

/// Plans a week from raw input tables.
///
/// Bad rows and bad groups are reported in the plan. Invalid options or an
/// empty roster abort the run.
pub fn plan_week(
    schedule: &[ScheduleRow],
    customers: &[CustomerRow],
    technicians: &[TechnicianRow],
    options: &PlannerOptions,
) -> Result<WeeklyPlan> {
    options.validate()?;

    let joined = join_jobs(schedule, customers);
    let (roster, rejected_technicians) = roster(technicians);
    let mut rejected_rows = joined.rejected;
    rejected_rows.extend(rejected_technicians);

    let assignments = assign_seeded(&joined.jobs, &roster, options)?;
    let routing = optimize_routes(&assignments, options);

    let plan = WeeklyPlan {
        assignments,
        routing,
        rejected_rows,
    };
    let summary = plan.summary();
    info!(
        routes = summary.routes,
        failed = summary.failed_routes,
        unassigned = summary.unassigned_jobs,
        rejected = summary.rejected_rows,
        improvement_pct = summary.improvement_pct(),
        "weekly plan ready"
    );
    Ok(plan)
}

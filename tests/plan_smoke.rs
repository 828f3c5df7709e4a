mod fixtures;

use dispatch_planner::config::PlannerOptions;
use dispatch_planner::error::PlannerError;
use dispatch_planner::models::{Day, Slot};
use dispatch_planner::planner::plan_week;
use dispatch_planner::table::{CustomerRow, TableKind};

use fixtures::{customer_rows, full_week, schedule_row, technician_rows};

#[test]
fn plans_a_full_week() {
    let schedule = full_week();
    let plan = plan_week(
        &schedule,
        &customer_rows(),
        &technician_rows(&["t1", "t2", "t3", "t4"]),
        &PlannerOptions::default(),
    )
    .unwrap();

    assert_eq!(plan.assignments.len(), schedule.len());
    assert!(plan.rejected_rows.is_empty());
    // 16 jobs a day, 8 per slot, 4 technicians at 2 + 2 each
    assert!(plan.assignments.iter().all(|a| a.is_assigned()));

    let summary = plan.summary();
    assert_eq!(summary.routes, 4 * Day::WEEKDAYS.len());
    assert_eq!(summary.failed_routes, 0);
    assert!(summary.optimized_distance > 0.0);

    for route in &plan.routing.routes {
        assert_eq!(route.jobs.len(), 4);
        let mut seen = route.order.clone();
        seen.sort();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    let table = plan.routing.comparison_rows();
    assert_eq!(table.len(), summary.routes);
    assert!(table.iter().all(|row| row.expected_revenue == Some(480.0)));
    let json = serde_json::to_string(&table[0]).unwrap();
    assert!(json.contains("\"day\":\"Monday\""));
}

#[test]
fn empty_roster_aborts() {
    let err = plan_week(&full_week(), &customer_rows(), &[], &PlannerOptions::default())
        .unwrap_err();
    assert_eq!(err, PlannerError::EmptyRoster);
}

#[test]
fn invalid_options_abort() {
    let options = PlannerOptions {
        daily_capacity: 0,
        ..PlannerOptions::default()
    };
    let err = plan_week(&full_week(), &customer_rows(), &technician_rows(&["t1"]), &options)
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidConfig(_)));
}

#[test]
fn bad_rows_do_not_abort_the_run() {
    let mut customers = customer_rows();
    customers.push(CustomerRow {
        customer_id: Some("Nowhere".to_string()),
        latitude: None,
        longitude: None,
    });
    let schedule = vec![
        schedule_row("Oakwood", Day::Monday, Slot::Morning),
        schedule_row("Nowhere", Day::Monday, Slot::Morning),
    ];

    let plan = plan_week(
        &schedule,
        &customers,
        &technician_rows(&["t1"]),
        &PlannerOptions::default(),
    )
    .unwrap();

    assert_eq!(plan.assignments.len(), 1);
    let tables: Vec<TableKind> = plan.rejected_rows.iter().map(|r| r.table).collect();
    assert_eq!(tables, vec![TableKind::Customer, TableKind::Schedule]);
    assert_eq!(plan.summary().routes, 1);
}

#[test]
fn overbooked_day_reports_unassigned() {
    let schedule = full_week();
    let plan = plan_week(
        &schedule,
        &customer_rows(),
        &technician_rows(&["t1", "t2"]),
        &PlannerOptions::default(),
    )
    .unwrap();

    // 16 jobs a day against 8 slots of capacity
    let summary = plan.summary();
    assert_eq!(summary.unassigned_jobs, 8 * Day::WEEKDAYS.len());
    assert_eq!(
        plan.assignments.iter().filter(|a| !a.is_assigned()).count(),
        summary.unassigned_jobs
    );
}

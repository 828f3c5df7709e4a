//! Technician assignment under daily capacity and slot balance rules.
//!
//! For each day the roster is shuffled with the caller's generator. A
//! balanced pass gives each technician, in draw order, up to `slot_quota`
//! Morning and `slot_quota` Afternoon jobs. A remainder pass then hands any
//! leftover jobs (Morning first) to the first technician in draw order that
//! still has daily capacity. Whatever is left after that is unassigned.

use std::collections::{BTreeMap, VecDeque};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::PlannerOptions;
use crate::error::{PlannerError, Result};
use crate::models::{Assignment, Day, Job, Slot, TechnicianId};

/// Per-technician load for a single day.
#[derive(Debug, Clone, Copy, Default)]
struct DayLoad {
    by_slot: [usize; 2],
}

impl DayLoad {
    fn total(&self) -> usize {
        self.by_slot[0] + self.by_slot[1]
    }

    fn in_slot(&self, slot: Slot) -> usize {
        self.by_slot[slot.index()]
    }

    fn add(&mut self, slot: Slot) {
        self.by_slot[slot.index()] += 1;
    }
}

/// Assigns jobs using a generator seeded from `options.seed`.
pub fn assign_seeded(
    jobs: &[Job],
    technicians: &[TechnicianId],
    options: &PlannerOptions,
) -> Result<Vec<Assignment>> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    assign(jobs, technicians, options, &mut rng)
}

/// Assigns technicians to jobs.
///
/// Returns one [`Assignment`] per input job, in input order. Jobs that cannot
/// be placed carry `technician: None`. The roster is treated as a set, so
/// its order and duplicates do not affect the result.
pub fn assign<R: Rng + ?Sized>(
    jobs: &[Job],
    technicians: &[TechnicianId],
    options: &PlannerOptions,
    rng: &mut R,
) -> Result<Vec<Assignment>> {
    let mut roster: Vec<&TechnicianId> = technicians.iter().collect();
    roster.sort();
    roster.dedup();
    if roster.is_empty() {
        return Err(PlannerError::EmptyRoster);
    }

    info!(jobs = jobs.len(), technicians = roster.len(), "assigning technicians");

    // job indices per day and slot, in input order
    let mut pools: BTreeMap<Day, [VecDeque<usize>; 2]> = BTreeMap::new();
    for (idx, job) in jobs.iter().enumerate() {
        pools.entry(job.day).or_default()[job.slot.index()].push_back(idx);
    }

    let mut placed: Vec<Option<TechnicianId>> = vec![None; jobs.len()];

    for (day, mut queues) in pools {
        let mut draw = roster.clone();
        draw.shuffle(rng);
        let mut loads = vec![DayLoad::default(); draw.len()];
        let mut assigned = 0usize;

        for (t, technician) in draw.iter().enumerate() {
            for slot in Slot::ALL {
                while loads[t].in_slot(slot) < options.slot_quota
                    && loads[t].total() < options.daily_capacity
                {
                    let Some(job) = queues[slot.index()].pop_front() else {
                        break;
                    };
                    placed[job] = Some((*technician).clone());
                    loads[t].add(slot);
                    assigned += 1;
                }
            }
        }

        for slot in Slot::ALL {
            while !queues[slot.index()].is_empty() {
                let Some(t) = loads
                    .iter()
                    .position(|load| load.total() < options.daily_capacity)
                else {
                    break;
                };
                if let Some(job) = queues[slot.index()].pop_front() {
                    placed[job] = Some(draw[t].clone());
                    loads[t].add(slot);
                    assigned += 1;
                }
            }
        }

        let unassigned = queues[0].len() + queues[1].len();
        if unassigned > 0 {
            warn!(?day, unassigned, "jobs exceed technician capacity");
        }
        debug!(?day, assigned, unassigned, "day assigned");
    }

    Ok(jobs
        .iter()
        .cloned()
        .zip(placed)
        .map(|(job, technician)| Assignment { job, technician })
        .collect())
}

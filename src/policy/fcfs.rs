//! First-Come, First-Served scheduling.

use super::{run_in_order, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// First-Come, First-Served.
///
/// Dispatches in arrival order and runs each process to completion.
/// Starvation-free and predictable, but short processes stuck behind a
/// long one wait for its whole burst (the convoy effect).
///
/// # Reference
/// Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        let mut order = processes.to_vec();
        // Stable sort: equal arrivals keep input order
        order.sort_by_key(|p| p.arrival);
        run_in_order(&order)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

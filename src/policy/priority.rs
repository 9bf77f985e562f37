//! Non-preemptive priority scheduling.

use super::{run_in_order, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Non-preemptive priority scheduling.
///
/// Same single-pass control flow as FCFS, but equal arrivals are ranked
/// by priority (lower value wins). Once a process is running it is never
/// interrupted, even when a more urgent one arrives mid-burst.
///
/// # Reference
/// Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.3.3
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        let mut order = processes.to_vec();
        // Stable sort: equal (arrival, priority) pairs keep input order
        order.sort_by_key(|p| (p.arrival, p.priority));
        run_in_order(&order)
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive)"
    }
}

//! Shortest Job First scheduling (non-preemptive).

use super::SchedulingPolicy;
use crate::models::{Process, ProcessId, Tick, Timeline};

/// Shortest Job First, non-preemptive.
///
/// At every dispatch point the arrived process with the smallest total
/// burst runs to completion. Optimal for mean waiting time when all
/// processes arrive together, but long processes can starve under a
/// steady stream of short ones.
///
/// # Reference
/// Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

/// Selection key: smallest burst wins, ties by arrival then id.
fn dispatch_key(p: &Process) -> (Tick, Tick, ProcessId) {
    (p.burst, p.arrival, p.id)
}

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        let mut order = processes.to_vec();
        order.sort_by_key(|p| p.arrival);

        let mut timeline = Timeline::new();
        let mut ready: Vec<usize> = Vec::new();
        let mut admitted = 0; // index bound into `order`
        let mut pending = order.len();
        let mut time: Tick = 0;

        while pending > 0 {
            while admitted < order.len() && order[admitted].arrival <= time {
                ready.push(admitted);
                admitted += 1;
            }

            if ready.is_empty() {
                // Nothing has arrived yet: idle one tick and retry
                timeline.extend_idle(time + 1);
                time += 1;
                continue;
            }

            let mut best = 0;
            for pos in 1..ready.len() {
                if dispatch_key(&order[ready[pos]]) < dispatch_key(&order[ready[best]]) {
                    best = pos;
                }
            }

            let p = order[ready.swap_remove(best)];
            timeline.extend_busy(p.id, time + p.burst);
            time += p.burst;
            pending -= 1;
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

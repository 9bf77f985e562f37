//! Shortest Remaining Time First scheduling (preemptive).

use super::SchedulingPolicy;
use crate::models::{Process, Tick, Timeline};

/// Shortest Remaining Time First, preemptive.
///
/// The preemptive companion of SJF: at every tick the arrived,
/// unfinished process with the least remaining work runs for exactly
/// one tick, so a fresh arrival with a shorter remainder takes over on
/// the next tick boundary. The decision is recomputed every tick; the
/// timeline builder merges consecutive ticks of the same process, so
/// uninterrupted stretches still appear as single segments.
///
/// # Reference
/// Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7
/// (there called STCF)
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        let mut order = processes.to_vec();
        order.sort_by_key(|p| p.arrival);
        let mut remaining: Vec<Tick> = order.iter().map(|p| p.burst).collect();

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
                timeline.extend_idle(time + 1);
                time += 1;
                continue;
            }

            // Least remaining work wins; ties by arrival, then id
            let mut best = 0;
            for pos in 1..ready.len() {
                let (cand, cur) = (ready[pos], ready[best]);
                let cand_key = (remaining[cand], order[cand].arrival, order[cand].id);
                let cur_key = (remaining[cur], order[cur].arrival, order[cur].id);
                if cand_key < cur_key {
                    best = pos;
                }
            }

            let idx = ready[best];
            timeline.extend_busy(order[idx].id, time + 1);
            remaining[idx] -= 1;
            time += 1;

            if remaining[idx] == 0 {
                // Completes at `time`; out of consideration from here on
                ready.swap_remove(best);
                pending -= 1;
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

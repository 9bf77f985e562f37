//! Round robin scheduling.

use std::collections::VecDeque;

use super::SchedulingPolicy;
use crate::models::{Process, Tick, Timeline};

/// Quantum used when none is given or the given one is non-positive.
pub const DEFAULT_QUANTUM: Tick = 2;

/// Round robin.
///
/// FIFO ready queue with a fixed time quantum: the head process runs
/// for at most `quantum` ticks, then re-enters at the tail if
/// unfinished. Processes arriving during a slice join the tail before
/// the preempted process does, so the queue reflects arrival order at
/// every enqueue.
///
/// # Reference
/// Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.3.3
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Ticks granted per visit.
    pub quantum: Tick,
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl RoundRobin {
    /// Creates a round robin policy with the given quantum.
    ///
    /// A non-positive quantum is corrected to [`DEFAULT_QUANTUM`]. The
    /// correction is deterministic; callers that want strict rejection
    /// must check before constructing the policy.
    pub fn new(quantum: Tick) -> Self {
        if quantum > 0 {
            Self { quantum }
        } else {
            Self::default()
        }
    }
}

/// Enqueues every process (in arrival order) that has arrived by `now`.
fn admit(order: &[Process], queue: &mut VecDeque<usize>, admitted: &mut usize, now: Tick) {
    while *admitted < order.len() && order[*admitted].arrival <= now {
        queue.push_back(*admitted);
        *admitted += 1;
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RoundRobin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, processes: &[Process]) -> Timeline {
        let mut order = processes.to_vec();
        order.sort_by_key(|p| p.arrival);
        let mut remaining: Vec<Tick> = order.iter().map(|p| p.burst).collect();

        let mut timeline = Timeline::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut admitted = 0; // index bound into `order`
        let mut time: Tick = 0;

        while admitted < order.len() || !queue.is_empty() {
            admit(&order, &mut queue, &mut admitted, time);

            let idx = match queue.pop_front() {
                Some(idx) => idx,
                None => {
                    // Queue drained but arrivals remain: idle up to the next one
                    let next = order[admitted].arrival;
                    timeline.extend_idle(next);
                    time = next;
                    continue;
                }
            };

            let slice = remaining[idx].min(self.quantum);
            timeline.extend_busy(order[idx].id, time + slice);
            time += slice;
            remaining[idx] -= slice;

            // Mid-slice arrivals enqueue ahead of the preempted process
            admit(&order, &mut queue, &mut admitted, time);
            if remaining[idx] > 0 {
                queue.push_back(idx);
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;
    use crate::policy::Fcfs;

    #[test]
    fn test_rr_interleaves_with_quantum() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];

        let timeline = RoundRobin::new(2).run(&processes);
        assert_eq!(
            timeline.segments(),
            &[
                TimelineSegment::busy(1, 0, 2),
                TimelineSegment::busy(2, 2, 4),
                TimelineSegment::busy(1, 4, 6),
                TimelineSegment::busy(2, 6, 7),
            ]
        );
    }

    #[test]
    fn test_rr_default_quantum_is_two() {
        assert_eq!(RoundRobin::default().quantum, DEFAULT_QUANTUM);
        assert_eq!(DEFAULT_QUANTUM, 2);
    }

    #[test]
    fn test_rr_corrects_non_positive_quantum() {
        assert_eq!(RoundRobin::new(0).quantum, DEFAULT_QUANTUM);
        assert_eq!(RoundRobin::new(-5).quantum, DEFAULT_QUANTUM);
        assert_eq!(RoundRobin::new(7).quantum, 7);
    }

    #[test]
    fn test_rr_single_process_coalesces_slices() {
        let timeline = RoundRobin::new(2).run(&[Process::new(1, 0, 5)]);
        assert_eq!(timeline.segments(), &[TimelineSegment::busy(1, 0, 5)]);
    }

    #[test]
    fn test_rr_mid_slice_arrival_enqueues_before_preempted() {
        // P2 arrives inside P1's first slice, so the order after that
        // slice is P2 then P1.
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 2)];

        let timeline = RoundRobin::new(2).run(&processes);
        assert_eq!(
            timeline.segments(),
            &[
                TimelineSegment::busy(1, 0, 2),
                TimelineSegment::busy(2, 2, 4),
                TimelineSegment::busy(1, 4, 7),
            ]
        );
    }

    #[test]
    fn test_rr_boundary_arrival_enqueues_before_preempted() {
        // P2 arrives exactly when P1's slice ends and still goes first.
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 1)];

        let timeline = RoundRobin::new(2).run(&processes);
        assert_eq!(
            timeline.segments(),
            &[
                TimelineSegment::busy(1, 0, 2),
                TimelineSegment::busy(2, 2, 3),
                TimelineSegment::busy(1, 3, 5),
            ]
        );
    }

    #[test]
    fn test_rr_idle_until_next_arrival() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 6, 2)];

        let timeline = RoundRobin::new(2).run(&processes);
        assert_eq!(
            timeline.segments(),
            &[
                TimelineSegment::busy(1, 0, 2),
                TimelineSegment::idle(2, 6),
                TimelineSegment::busy(2, 6, 8),
            ]
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 9, 2),
        ];

        let rr = RoundRobin::new(100).run(&processes);
        assert_eq!(rr, Fcfs.run(&processes));
    }

    #[test]
    fn test_rr_empty_workload() {
        assert!(RoundRobin::default().run(&[]).is_empty());
    }
}

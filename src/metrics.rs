//! Simulation timing metrics.
//!
//! Derives per-process and aggregate performance indicators from a
//! completed execution timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Makespan | End of the timeline |
//! | CPU utilization | Busy ticks / timeline span |
//! | Throughput | Completed processes / makespan |
//! | Context switches | Changes of running process (idle-transparent) |
//!
//! Averages divide by the number of distinct completed processes: a
//! process preempted into several segments still counts once.
//!
//! # Reference
//! Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId, Tick, Timeline};

/// Timing figures for one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub id: ProcessId,
    /// Tick at which the last slice finished.
    pub completion: Tick,
    /// Completion minus arrival.
    pub turnaround: Tick,
    /// Turnaround minus burst; time spent ready but not running.
    pub waiting: Tick,
}

/// The full outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution timeline, gapless from t=0.
    pub timeline: Timeline,
    /// Per-process figures, sorted by id.
    pub process_stats: Vec<ProcessStats>,
    /// Mean waiting time over completed processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over completed processes.
    pub avg_turnaround_time: f64,
    /// Latest completion tick (0 for an empty run).
    pub makespan: Tick,
    /// Busy ticks over the timeline span (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick of makespan.
    pub throughput: f64,
    /// Times the CPU switched to a different process.
    pub context_switches: usize,
}

impl SimulationResult {
    /// Derives all metrics from a timeline and its input workload.
    ///
    /// Completion times are read off the timeline (end of each
    /// process's last busy segment), so the figures always describe
    /// what actually ran. A process absent from the timeline is not
    /// counted; averages divide by the completed count, never by the
    /// number of segments.
    pub fn calculate(timeline: Timeline, processes: &[Process]) -> Self {
        let mut process_stats: Vec<ProcessStats> = Vec::with_capacity(processes.len());
        for p in processes {
            if let Some(completion) = timeline.completion_of(p.id) {
                process_stats.push(ProcessStats {
                    id: p.id,
                    completion,
                    turnaround: completion - p.arrival,
                    waiting: completion - p.arrival - p.burst,
                });
            }
        }
        process_stats.sort_by_key(|s| s.id);

        let completed = process_stats.len();
        let waiting_sum: Tick = process_stats.iter().map(|s| s.waiting).sum();
        let turnaround_sum: Tick = process_stats.iter().map(|s| s.turnaround).sum();

        let (avg_waiting_time, avg_turnaround_time) = if completed == 0 {
            (0.0, 0.0)
        } else {
            (
                waiting_sum as f64 / completed as f64,
                turnaround_sum as f64 / completed as f64,
            )
        };

        let makespan = timeline.end();
        let span = timeline.span();
        let cpu_utilization = if span > 0 {
            timeline.busy_ticks() as f64 / span as f64
        } else {
            0.0
        };
        let throughput = if makespan > 0 {
            completed as f64 / makespan as f64
        } else {
            0.0
        };
        let context_switches = timeline.context_switches();

        Self {
            timeline,
            process_stats,
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            cpu_utilization,
            throughput,
            context_switches,
        }
    }

    /// Number of processes that completed.
    #[inline]
    pub fn completed_count(&self) -> usize {
        self.process_stats.len()
    }

    /// Stats row for one process, if it completed.
    pub fn stats_for(&self, pid: ProcessId) -> Option<&ProcessStats> {
        self.process_stats.iter().find(|s| s.id == pid)
    }
}

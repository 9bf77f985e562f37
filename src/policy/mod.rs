//! Scheduling policies.
//!
//! Each policy is a stateless strategy that turns a workload into an
//! execution [`Timeline`]. Non-preemptive policies (FCFS, SJF, priority)
//! commit a full burst per dispatch; preemptive policies (SRTF, round
//! robin) revisit the decision on tick or quantum boundaries.
//!
//! # Usage
//!
//! ```
//! use tick_sched::models::Process;
//! use tick_sched::policy::{Fcfs, SchedulingPolicy};
//!
//! let workload = vec![Process::new(1, 0, 5), Process::new(2, 2, 3)];
//! let timeline = Fcfs.run(&workload);
//! assert_eq!(timeline.end(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::models::{Process, Timeline};
use std::fmt::Debug;

/// A scheduling policy that produces an execution timeline.
///
/// # Input Contract
/// `run` assumes a workload that passed
/// [`validate_workload`](crate::validation::validate_workload): positive
/// bursts, non-negative arrivals, unique positive ids. The engine facade
/// enforces this before dispatching.
///
/// # Output Contract
/// The clock starts at t=0. Waiting for the first arrival is recorded as
/// an explicit idle segment, so every produced timeline is gapless from
/// 0 through the last completion.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Whether the policy may interrupt a running process.
    fn is_preemptive(&self) -> bool;

    /// Runs the workload to completion and returns the timeline.
    fn run(&self, processes: &[Process]) -> Timeline;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Runs processes non-preemptively in the given dispatch order.
///
/// Each process runs for its full burst; when the next process in order
/// has not arrived yet, the gap becomes an idle segment. Shared by the
/// FCFS and priority policies, which differ only in how they order the
/// workload.
pub(crate) fn run_in_order(order: &[Process]) -> Timeline {
    let mut timeline = Timeline::new();
    for p in order {
        timeline.extend_idle(p.arrival);
        let start = timeline.end();
        timeline.extend_busy(p.id, start + p.burst);
    }
    timeline
}

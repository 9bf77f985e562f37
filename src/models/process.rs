//! Process (workload entry) model.
//!
//! A process is the unit of scheduling: a single burst of CPU demand
//! that arrives at a known tick and runs to completion, possibly in
//! several slices under a preemptive policy.
//!
//! # Reference
//! Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::Tick;

/// Unique process identifier.
///
/// Identifiers carry no ordering meaning; policies compare ids only to
/// break exact ties deterministically.
pub type ProcessId = u32;

/// A process submitted to the simulator.
///
/// Describes the full CPU demand up front: one arrival tick, one total
/// burst. There are no I/O phases, so a process is ready from its
/// arrival until its burst is exhausted.
///
/// # Time Representation
/// All times are in [`Tick`]s relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (must be nonzero).
    pub id: ProcessId,
    /// Tick at which the process becomes ready.
    pub arrival: Tick,
    /// Total CPU demand in ticks (must be positive).
    pub burst: Tick,
    /// Scheduling priority, lower value = more urgent. Read only by the
    /// priority policy.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process with the default priority (0).
    pub fn new(id: ProcessId, arrival: Tick, burst: Tick) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower value = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 2, 7).with_priority(1);

        assert_eq!(p.id, 3);
        assert_eq!(p.arrival, 2);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, 1);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(Process::new(1, 0, 5).priority, 0);
    }

    #[test]
    fn test_priority_defaults_on_deserialize() {
        let p: Process = serde_json::from_str(r#"{"id":1,"arrival":0,"burst":5}"#).unwrap();
        assert_eq!(p, Process::new(1, 0, 5));
    }
}

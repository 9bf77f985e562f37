//! Simulation engine facade.
//!
//! Ties the crate together: algorithm selection by name, the request
//! container, and the [`simulate`] entry point that validates the
//! workload, runs the chosen policy, and aggregates metrics.
//!
//! # Usage
//!
//! ```
//! use tick_sched::engine::{simulate, Algorithm, SimulationRequest};
//! use tick_sched::models::Process;
//!
//! let request = SimulationRequest::new(
//!     vec![Process::new(1, 0, 5), Process::new(2, 1, 3)],
//!     Algorithm::Fcfs,
//! );
//!
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.makespan, 8);
//! assert!((result.avg_waiting_time - 2.0).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::metrics::SimulationResult;
use crate::models::{Process, Tick};
use crate::policy::{Fcfs, Priority, RoundRobin, SchedulingPolicy, Sjf, Srtf};
use crate::validation::{validate_workload, ValidationError};

pub use crate::policy::DEFAULT_QUANTUM;

/// The five supported scheduling algorithms.
///
/// Wire names are the canonical spellings `FCFS`, `SJF`, `SRTF`,
/// `Priority`, and `RoundRobin`, both for serde and for [`FromStr`].
/// Anything else is rejected; no default is silently substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Priority, lower value first (non-preemptive).
    Priority,
    /// Round robin with a fixed quantum.
    RoundRobin,
}

/// Error from parsing an [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The unrecognized name.
    pub name: String,
}

impl Algorithm {
    /// All algorithms, in canonical order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "RoundRobin",
        }
    }

    /// Builds the simulator for this selection.
    ///
    /// `quantum` matters only to round robin: `None` or a non-positive
    /// value resolves to [`DEFAULT_QUANTUM`]. The other policies take
    /// no parameters.
    pub fn policy(&self, quantum: Option<Tick>) -> Box<dyn SchedulingPolicy> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::Priority => Box::new(Priority),
            Algorithm::RoundRobin => {
                Box::new(RoundRobin::new(quantum.unwrap_or(DEFAULT_QUANTUM)))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRTF" => Ok(Algorithm::Srtf),
            "Priority" => Ok(Algorithm::Priority),
            "RoundRobin" => Ok(Algorithm::RoundRobin),
            other => Err(ParseAlgorithmError {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::as_str).collect();
        write!(
            f,
            "Unknown algorithm '{}'; expected one of {}",
            self.name,
            names.join(", ")
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Input container for one simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Workload to schedule.
    pub processes: Vec<Process>,
    /// Policy selection.
    pub algorithm: Algorithm,
    /// Round robin quantum. `None` resolves to [`DEFAULT_QUANTUM`];
    /// ignored by every other algorithm.
    #[serde(default)]
    pub quantum: Option<Tick>,
}

impl SimulationRequest {
    /// Creates a request with no explicit quantum.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the round robin quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Runs one simulation request end to end.
///
/// The workload is validated first; on any validation error no
/// simulation is attempted and all detected problems are returned.
/// Over valid input the run is total and deterministic: it always
/// terminates, and the same request yields the same result every time.
/// An empty workload is not an error and produces an empty result.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_workload(&request.processes)?;
    let policy = request.algorithm.policy(request.quantum);
    let timeline = policy.run(&request.processes);
    Ok(SimulationResult::calculate(timeline, &request.processes))
}

//! Discrete-tick CPU scheduling simulator.
//!
//! Computes, for a set of CPU-bound processes, the execution order and
//! timing metrics produced by one of five classical scheduling
//! policies: FCFS, SJF, SRTF, priority, and round robin. The engine is
//! a pure computation: given a workload and an algorithm selection it
//! returns an execution timeline plus aggregate statistics. No clocks,
//! no threads, no I/O; rendering and input parsing belong to the
//! caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `TimelineSegment`
//! - **`policy`**: The five simulators behind the `SchedulingPolicy` trait
//! - **`metrics`**: `SimulationResult` aggregation (waiting, turnaround, makespan)
//! - **`engine`**: `Algorithm` selection, `SimulationRequest`, `simulate()`
//! - **`validation`**: Workload integrity checks (bursts, arrivals, ids)
//!
//! # Usage
//!
//! ```
//! use tick_sched::engine::{simulate, Algorithm, SimulationRequest};
//! use tick_sched::models::Process;
//!
//! let request = SimulationRequest::new(
//!     vec![
//!         Process::new(1, 0, 4),
//!         Process::new(2, 1, 3),
//!     ],
//!     Algorithm::RoundRobin,
//! )
//! .with_quantum(2);
//!
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.timeline.len(), 4);
//! assert!((result.avg_waiting_time - 2.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod engine;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod validation;

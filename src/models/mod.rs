//! Simulation domain models.
//!
//! Core data types shared by every scheduling policy: the immutable
//! [`Process`] input record and the [`Timeline`] of contiguous execution
//! segments a policy run produces.
//!
//! # Time Model
//!
//! All times are integer [`Tick`]s relative to a simulation epoch (t=0).
//! A tick is the indivisible scheduling unit: arrivals and bursts are
//! whole ticks, and preemption decisions happen on tick boundaries only.

mod process;
mod timeline;

pub use process::{Process, ProcessId};
pub use timeline::{SegmentKind, Timeline, TimelineError, TimelineSegment};

/// Simulation time unit.
///
/// Signed so that out-of-range input (negative arrival times) is
/// representable and can be rejected by validation instead of silently
/// wrapping.
pub type Tick = i64;

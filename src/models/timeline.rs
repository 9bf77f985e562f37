//! Execution timeline model.
//!
//! A timeline is the flat record of what the simulated CPU did: an
//! ordered, gapless sequence of half-open `[start, end)` segments, each
//! either busy with exactly one process or explicitly idle. Policies
//! build timelines through the appending API below, so contiguity and
//! coalescing hold by construction.
//!
//! # Reference
//! Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Tick};

/// What the CPU was doing during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Executing the given process.
    Busy(ProcessId),
    /// No process was ready.
    Idle,
}

/// One contiguous interval of CPU activity.
///
/// Half-open: the interval covers ticks `start..end`, so `end` is the
/// first tick *not* covered. A valid segment has `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// What ran, or [`SegmentKind::Idle`].
    pub kind: SegmentKind,
    /// First tick covered.
    pub start: Tick,
    /// First tick after the interval.
    pub end: Tick,
}

/// A complete execution timeline.
///
/// Append-only. Every segment after the first begins exactly where the
/// previous one ended, and adjacent segments never share a kind (they
/// are merged on append). The first segment may start later than t=0;
/// the simulators never do this themselves, recording leading idle time
/// explicitly instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

/// A segment rejected by [`Timeline::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineError {
    /// The segment covers no ticks (`end <= start`).
    EmptyInterval { start: Tick, end: Tick },
    /// The segment does not begin where the previous one ended.
    Gap { expected: Tick, found: Tick },
}

impl TimelineSegment {
    /// Creates a busy segment for one process.
    pub fn busy(pid: ProcessId, start: Tick, end: Tick) -> Self {
        Self {
            kind: SegmentKind::Busy(pid),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: Tick, end: Tick) -> Self {
        Self {
            kind: SegmentKind::Idle,
            start,
            end,
        }
    }

    /// Segment length in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }

    /// Whether the CPU was idle during this segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.kind, SegmentKind::Idle)
    }

    /// The running process id, or `None` for an idle segment.
    #[inline]
    pub fn process_id(&self) -> Option<ProcessId> {
        match self.kind {
            SegmentKind::Busy(pid) => Some(pid),
            SegmentKind::Idle => None,
        }
    }

    /// Whether `tick` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, tick: Tick) -> bool {
        self.start <= tick && tick < self.end
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment, enforcing contiguity.
    ///
    /// The first segment may start anywhere; every later segment must
    /// begin exactly at [`end()`](Self::end). A segment with the same
    /// kind as the current last one is merged into it.
    pub fn push(&mut self, segment: TimelineSegment) -> Result<(), TimelineError> {
        if segment.end <= segment.start {
            return Err(TimelineError::EmptyInterval {
                start: segment.start,
                end: segment.end,
            });
        }
        if let Some(last) = self.segments.last_mut() {
            if segment.start != last.end {
                return Err(TimelineError::Gap {
                    expected: last.end,
                    found: segment.start,
                });
            }
            if last.kind == segment.kind {
                last.end = segment.end;
                return Ok(());
            }
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Extends the timeline with busy time for `pid` up to `until`.
    ///
    /// The new interval starts at [`end()`](Self::end), so contiguity
    /// holds by construction. A no-op when `until` is not past the end.
    pub fn extend_busy(&mut self, pid: ProcessId, until: Tick) {
        self.extend(SegmentKind::Busy(pid), until);
    }

    /// Extends the timeline with idle time up to `until`.
    ///
    /// Same contract as [`extend_busy`](Self::extend_busy).
    pub fn extend_idle(&mut self, until: Tick) {
        self.extend(SegmentKind::Idle, until);
    }

    fn extend(&mut self, kind: SegmentKind, until: Tick) {
        let start = self.end();
        if until <= start {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.kind == kind {
                last.end = until;
                return;
            }
        }
        self.segments.push(TimelineSegment { kind, start, end: until });
    }

    /// All segments in order.
    #[inline]
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment (0 when empty).
    pub fn start(&self) -> Tick {
        self.segments.first().map_or(0, |s| s.start)
    }

    /// End of the last segment (0 when empty).
    ///
    /// Also the tick where the next appended segment will start.
    pub fn end(&self) -> Tick {
        self.segments.last().map_or(0, |s| s.end)
    }

    /// Covered span (`end - start`) in ticks.
    pub fn span(&self) -> Tick {
        self.end() - self.start()
    }

    /// Total busy ticks across all processes.
    pub fn busy_ticks(&self) -> Tick {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(TimelineSegment::duration)
            .sum()
    }

    /// Total busy ticks for one process.
    pub fn busy_ticks_for(&self, pid: ProcessId) -> Tick {
        self.segments_for(pid).iter().map(|s| s.duration()).sum()
    }

    /// Total idle ticks.
    pub fn idle_ticks(&self) -> Tick {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(TimelineSegment::duration)
            .sum()
    }

    /// All segments during which `pid` ran.
    pub fn segments_for(&self, pid: ProcessId) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id() == Some(pid))
            .collect()
    }

    /// Completion time of a process: end of its last busy segment.
    ///
    /// `None` if the process never ran.
    pub fn completion_of(&self, pid: ProcessId) -> Option<Tick> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.process_id() == Some(pid))
            .map(|s| s.end)
    }

    /// Number of context switches.
    ///
    /// Counts each time the CPU picks up a different process than the
    /// one it last ran. Idle gaps are transparent: idle followed by the
    /// same process resuming is not a switch, and the first dispatch is
    /// not one either.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut last_pid: Option<ProcessId> = None;
        for seg in &self.segments {
            if let SegmentKind::Busy(pid) = seg.kind {
                if let Some(prev) = last_pid {
                    if prev != pid {
                        switches += 1;
                    }
                }
                last_pid = Some(pid);
            }
        }
        switches
    }

    /// Whether every segment is non-empty and starts where the previous
    /// one ended. Always true for timelines built through this API;
    /// useful for checking deserialized data.
    pub fn is_contiguous(&self) -> bool {
        self.segments.iter().all(|s| s.end > s.start)
            && self.segments.windows(2).all(|w| w[0].end == w[1].start)
    }
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInterval { start, end } => {
                write!(f, "Empty interval [{start}, {end})")
            }
            Self::Gap { expected, found } => {
                write!(f, "Segment starts at {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for TimelineError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        // idle [0,2), P1 [2,5), P2 [5,6), idle [6,8), P1 [8,10)
        let mut t = Timeline::new();
        t.extend_idle(2);
        t.extend_busy(1, 5);
        t.extend_busy(2, 6);
        t.extend_idle(8);
        t.extend_busy(1, 10);
        t
    }

    #[test]
    fn test_segment_accessors() {
        let busy = TimelineSegment::busy(3, 2, 7);
        assert_eq!(busy.duration(), 5);
        assert_eq!(busy.process_id(), Some(3));
        assert!(!busy.is_idle());

        let idle = TimelineSegment::idle(0, 2);
        assert!(idle.is_idle());
        assert_eq!(idle.process_id(), None);
    }

    #[test]
    fn test_segment_contains_is_half_open() {
        let s = TimelineSegment::busy(1, 2, 5);
        assert!(!s.contains(1));
        assert!(s.contains(2));
        assert!(s.contains(4));
        assert!(!s.contains(5));
    }

    #[test]
    fn test_push_rejects_empty_interval() {
        let mut t = Timeline::new();
        assert_eq!(
            t.push(TimelineSegment::busy(1, 3, 3)),
            Err(TimelineError::EmptyInterval { start: 3, end: 3 })
        );
    }

    #[test]
    fn test_push_rejects_gap() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::busy(1, 0, 4)).unwrap();
        assert_eq!(
            t.push(TimelineSegment::busy(2, 5, 6)),
            Err(TimelineError::Gap {
                expected: 4,
                found: 5
            })
        );
        // Overlap is a gap too: the start must equal the previous end.
        assert_eq!(
            t.push(TimelineSegment::busy(2, 3, 6)),
            Err(TimelineError::Gap {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_push_first_segment_may_start_anywhere() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::busy(1, 3, 5)).unwrap();
        assert_eq!(t.start(), 3);
        assert_eq!(t.end(), 5);
        assert_eq!(t.span(), 2);
    }

    #[test]
    fn test_push_coalesces_same_kind() {
        let mut t = Timeline::new();
        t.push(TimelineSegment::busy(1, 0, 2)).unwrap();
        t.push(TimelineSegment::busy(1, 2, 4)).unwrap();
        assert_eq!(t.segments(), &[TimelineSegment::busy(1, 0, 4)]);

        t.push(TimelineSegment::busy(2, 4, 5)).unwrap();
        assert_eq!(t.len(), 2); // Different process: not merged
    }

    #[test]
    fn test_extend_starts_at_zero_when_empty() {
        let mut t = Timeline::new();
        t.extend_busy(1, 5);
        assert_eq!(t.segments(), &[TimelineSegment::busy(1, 0, 5)]);
    }

    #[test]
    fn test_extend_is_noop_when_not_past_end() {
        let mut t = Timeline::new();
        t.extend_busy(1, 5);
        t.extend_idle(5);
        t.extend_busy(2, 3);
        assert_eq!(t.segments(), &[TimelineSegment::busy(1, 0, 5)]);
    }

    #[test]
    fn test_extend_coalesces_resumed_slices() {
        let mut t = Timeline::new();
        t.extend_busy(1, 2);
        t.extend_busy(1, 4); // Same process continues
        t.extend_busy(2, 6);
        assert_eq!(
            t.segments(),
            &[TimelineSegment::busy(1, 0, 4), TimelineSegment::busy(2, 4, 6)]
        );
    }

    #[test]
    fn test_tick_accounting() {
        let t = sample_timeline();
        assert_eq!(t.busy_ticks(), 6);
        assert_eq!(t.idle_ticks(), 4);
        assert_eq!(t.busy_ticks_for(1), 5);
        assert_eq!(t.busy_ticks_for(2), 1);
        assert_eq!(t.busy_ticks() + t.idle_ticks(), t.span());
    }

    #[test]
    fn test_segments_for() {
        let t = sample_timeline();
        let p1 = t.segments_for(1);
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[0].start, 2);
        assert_eq!(p1[1].start, 8);
        assert!(t.segments_for(99).is_empty());
    }

    #[test]
    fn test_completion_of() {
        let t = sample_timeline();
        assert_eq!(t.completion_of(1), Some(10)); // Last slice ends at 10
        assert_eq!(t.completion_of(2), Some(6));
        assert_eq!(t.completion_of(99), None);
    }

    #[test]
    fn test_context_switches_skip_idle() {
        let t = sample_timeline();
        // P1 → P2 → (idle) → P1: two switches, idle is transparent.
        assert_eq!(t.context_switches(), 2);

        let mut resumed = Timeline::new();
        resumed.extend_busy(1, 3);
        resumed.extend_idle(5);
        resumed.extend_busy(1, 8);
        assert_eq!(resumed.context_switches(), 0);
    }

    #[test]
    fn test_is_contiguous() {
        assert!(Timeline::new().is_contiguous());
        assert!(sample_timeline().is_contiguous());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.start(), 0);
        assert_eq!(t.end(), 0);
        assert_eq!(t.span(), 0);
        assert_eq!(t.busy_ticks(), 0);
        assert_eq!(t.context_switches(), 0);
    }
}

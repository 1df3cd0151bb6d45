//! Simulation time model.
//!
//! # Design
//!
//! The dispatch loop is frame-driven: each tick advances the world by a
//! caller-supplied `dt` in seconds, which may vary from frame to frame.  Two
//! quantities are therefore tracked:
//!
//! - [`Tick`]: an integer frame counter, used to label output rows.
//! - [`SimTime`]: accumulated simulated seconds, used to stamp emergencies
//!   at intake.  It is monotonic because `dt` is never negative.

use std::cmp::Ordering;
use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimTime ──────────────────────────────────────────────────────────────────

/// Simulated seconds since the start of the run.
///
/// Totally ordered (via `f64::total_cmp`) so it can be part of a queue key.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Frame counter plus accumulated simulated time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Index of the tick currently being processed.
    pub current_tick: Tick,
    /// Simulated seconds elapsed before `current_tick` began.
    pub now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current tick, which lasted `dt` seconds.
    ///
    /// Negative or NaN `dt` values are treated as zero so time never runs
    /// backwards.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.now = SimTime(self.now.0 + dt as f64);
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.now)
    }
}

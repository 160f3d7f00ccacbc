//! Tick counting.
//!
//! # Design
//!
//! The optimizer never owns a clock: the host advances physics and calls in
//! once per tick.  `Tick` counts those calls for logging and observers, and
//! `TickRate` converts per-second quantities (turn rates, acceleration) into
//! per-tick ones.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A monotonically increasing count of host ticks seen by a bot session.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Advance in place by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickRate ──────────────────────────────────────────────────────────────────

/// Host physics rate in ticks per second.  Default: 125 Hz (8 ms ticks).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRate(pub u32);

impl TickRate {
    pub const DEFAULT: TickRate = TickRate(125);

    #[inline]
    pub fn hz(self) -> f64 {
        self.0 as f64
    }

    /// Seconds covered by one tick.
    #[inline]
    pub fn tick_secs(self) -> f64 {
        1.0 / self.0 as f64
    }

    /// Degrees turned during one tick at `deg_per_sec`.
    #[inline]
    pub fn per_tick(self, deg_per_sec: f64) -> f64 {
        deg_per_sec * self.tick_secs()
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TickRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Search parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Ticks each candidate is held before it is scored.  Default: 25.
    pub window_ticks: usize,

    /// Turn-rate grid spacing in deg/s.  Also the rate above which a
    /// falling score ends a turn direction early.  Default: 15.
    pub turn_step: f64,

    /// Highest turn rate tried in either direction.  Default: 360 deg/s.
    pub turn_max: f64,
}

impl SolverConfig {
    /// Ticks queued behind the one issued when a candidate starts.
    #[inline]
    pub fn repeat_ticks(&self) -> usize {
        self.window_ticks.saturating_sub(1)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            window_ticks: 25,
            turn_step:    15.0,
            turn_max:     360.0,
        }
    }
}

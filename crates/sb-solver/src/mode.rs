use std::fmt;

/// What a [`Session`][crate::Session] does with each tick.
///
/// Modes change only through explicit start/stop/reset calls.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Issue the idle command to keep the agent alive.
    #[default]
    Idle,
    /// Drain queued actions into history; no search.
    Recording,
    /// Drain queued actions, then hill-climb window by window.
    Solving,
    /// Replay history tick for tick.
    Playing,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle      => "idle",
            Mode::Recording => "recording",
            Mode::Solving   => "solving",
            Mode::Playing   => "playing",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

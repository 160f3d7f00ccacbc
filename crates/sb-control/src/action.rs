//! The discrete action space.

/// Direction of an action.  `Idle` doubles as the "no action" sentinel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Forward + left strafe.
    LeftDiag,
    /// Forward + right strafe.
    RightDiag,
    /// Turn left at `turn_rate`.
    Left,
    /// Turn right at `turn_rate`.
    Right,
    #[default]
    Idle,
}

impl ActionKind {
    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(self, ActionKind::LeftDiag | ActionKind::RightDiag)
    }

    #[inline]
    pub fn is_turn(self) -> bool {
        matches!(self, ActionKind::Left | ActionKind::Right)
    }

    #[inline]
    pub fn is_right(self) -> bool {
        matches!(self, ActionKind::RightDiag | ActionKind::Right)
    }

    /// The diagonal pressed while performing this action on the ground.
    pub fn grounded_equivalent(self) -> ActionKind {
        match self {
            ActionKind::Left  => ActionKind::LeftDiag,
            ActionKind::Right => ActionKind::RightDiag,
            other             => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::LeftDiag  => "left_diag",
            ActionKind::RightDiag => "right_diag",
            ActionKind::Left      => "left",
            ActionKind::Right     => "right",
            ActionKind::Idle      => "idle",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tick's worth of intent: a direction plus its turn rate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,
    /// Degrees per second; only read for `Left`/`Right`.
    pub turn_rate: f64,
    /// Never jump on this tick, even when fast enough on the ground.
    pub suppress_jump: bool,
}

impl Action {
    pub const IDLE: Action = Action { kind: ActionKind::Idle, turn_rate: 0.0, suppress_jump: false };

    pub const fn new(kind: ActionKind, turn_rate: f64) -> Self {
        Self { kind, turn_rate, suppress_jump: false }
    }

    pub const fn left_diag() -> Self {
        Self::new(ActionKind::LeftDiag, 0.0)
    }

    pub const fn right_diag() -> Self {
        Self::new(ActionKind::RightDiag, 0.0)
    }

    pub const fn left(turn_rate: f64) -> Self {
        Self::new(ActionKind::Left, turn_rate)
    }

    pub const fn right(turn_rate: f64) -> Self {
        Self::new(ActionKind::Right, turn_rate)
    }

    pub const fn with_suppress_jump(mut self, suppress_jump: bool) -> Self {
        self.suppress_jump = suppress_jump;
        self
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.kind == ActionKind::Idle
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_turn() {
            write!(f, "{} {:.0}deg/s", self.kind, self.turn_rate)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

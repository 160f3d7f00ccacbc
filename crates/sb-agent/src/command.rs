//! The per-tick input handed to the host.

/// One tick of player input, laid out like the host's user command.
///
/// Move axes are signed bytes: `127` is full speed forward / right / up.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCommand {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub buttons: u32,
    pub weapon: u8,
    pub weapon_primary: u8,
    pub fov: u8,
    pub forward_move: i8,
    pub right_move: i8,
    pub up_move: i8,
}

impl MoveCommand {
    /// Weapon slot the bot holds (rocket launcher); never fired.
    pub const WEAPON: u8 = 5;
    pub const FOV: u8 = 100;

    /// A command that only sets the view yaw and the three move axes.
    pub fn new(yaw: f64, forward_move: i8, right_move: i8, up_move: i8) -> Self {
        Self {
            pitch: 0.0,
            yaw,
            roll: 0.0,
            buttons: 0,
            weapon: Self::WEAPON,
            weapon_primary: Self::WEAPON,
            fov: Self::FOV,
            forward_move,
            right_move,
            up_move,
        }
    }

    /// `true` when no move axis is pressed.
    pub fn is_neutral(&self) -> bool {
        self.forward_move == 0 && self.right_move == 0 && self.up_move == 0
    }
}

//! Movement constants.

use sb_core::TickRate;

/// Tunables of the action → input mapping.
///
/// The defaults match the host's stock movement physics; tests shrink or
/// override individual fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveConfig {
    /// Host physics rate.  Default: 125 Hz.
    pub tick_rate: TickRate,

    /// Magnitude pressed on each move axis.  Default: 127 (full).
    pub wish_move: i8,

    /// Planar speed above which a grounded agent jumps.  Default: 320 u/s.
    pub max_ground_speed: f64,

    /// Air acceleration used for the optimal strafe angle.  Default: 1.0.
    pub air_accel: f64,

    /// View / velocity heading gap beyond which an air turn starts from
    /// the velocity heading.  Default: 5°.
    pub turn_snap_angle: f64,

    /// Offset subtracted from a positive optimal strafe angle to account
    /// for the 45° wish direction of a diagonal.  Default: 45°.
    pub diagonal_offset: f64,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            tick_rate:        TickRate::DEFAULT,
            wish_move:        127,
            max_ground_speed: 320.0,
            air_accel:        1.0,
            turn_snap_angle:  5.0,
            diagonal_offset:  45.0,
        }
    }
}

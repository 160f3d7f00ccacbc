//! Opaque handles owned by the host simulation.

use std::fmt;

/// The entity the agent is standing on, as reported by the host.
///
/// The host uses `-1` for "nothing below" (airborne or unknown), which is
/// exposed here as [`GroundRef::AIRBORNE`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundRef(pub i32);

impl GroundRef {
    /// Sentinel meaning "not on any surface".
    pub const AIRBORNE: GroundRef = GroundRef(-1);

    #[inline(always)]
    pub fn is_grounded(self) -> bool {
        self.0 >= 0
    }
}

impl Default for GroundRef {
    /// Returns `AIRBORNE` so an unsampled reference is visibly unset.
    #[inline(always)]
    fn default() -> Self {
        Self::AIRBORNE
    }
}

impl fmt::Display for GroundRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_grounded() {
            write!(f, "GroundRef({})", self.0)
        } else {
            f.write_str("GroundRef(airborne)")
        }
    }
}

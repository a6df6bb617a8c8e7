//! Skinning Mode Selection
//!
//! Both palettes are computed for every draw call; [`SkinningMode`] only
//! decides which vertex shader variant consumes them.

use std::fmt;

/// Vertex skinning technique used for a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkinningMode {
    /// Linear-blend skinning over the bone matrix palette.
    #[default]
    Linear,
    /// Dual-quaternion skinning over the dual-quaternion palette, using
    /// the fast (non-iterative) blend.
    DualQuaternionFast,
}

impl SkinningMode {
    pub const ALL: [Self; 2] = [Self::Linear, Self::DualQuaternionFast];

    /// Name of the vertex shader variant for this mode.
    #[inline]
    #[must_use]
    pub fn shader_variant(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::DualQuaternionFast => "dual-quaternion-fast",
        }
    }

    #[inline]
    #[must_use]
    pub fn uses_dual_quaternions(self) -> bool {
        matches!(self, Self::DualQuaternionFast)
    }

    /// The other mode, for a UI toggle.
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::DualQuaternionFast,
            Self::DualQuaternionFast => Self::Linear,
        }
    }
}

impl fmt::Display for SkinningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shader_variant())
    }
}

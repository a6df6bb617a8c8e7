//! Unit dual quaternions for dual-quaternion skinning.
//!
//! A rigid transform (rotation `r`, translation `t`) maps to the unit dual
//! quaternion `q̂ = t̂ · r̂ = r + ε · ½ (0, t) r`. The real part is the rotation
//! itself, the dual part couples the translation with it.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

/// A unit dual quaternion `(real, dual)`.
///
/// `real` is a unit quaternion (pure rotation), `dual` encodes the
/// translation applied after that rotation. Both halves are stored in glam's
/// `xyzw` order, which is also the order the skinning shaders read.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct UnitDualQuaternion {
    /// Rotation part.
    pub real: Quat,
    /// Translation part, `½ (0, t) ⊗ real`.
    pub dual: Quat,
}

impl Default for UnitDualQuaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl UnitDualQuaternion {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        real: Quat::IDENTITY,
        dual: Quat::from_xyzw(0.0, 0.0, 0.0, 0.0),
    };

    /// Maps a rigid transform (rotate by `rotation`, then translate by
    /// `translation`) to a unit dual quaternion.
    ///
    /// `rotation` must already be normalized; this is not checked in release
    /// builds and a non-unit input only costs precision.
    #[inline]
    #[must_use]
    pub fn from_rigid_transform(rotation: Quat, translation: Vec3) -> Self {
        debug_assert!(
            rotation.is_normalized(),
            "rigid transform rotation must be a unit quaternion, got length {}",
            rotation.length()
        );

        let half_t = translation * 0.5;
        // glam's `*` is the Hamilton product `lhs ⊗ rhs`: translation on the left.
        let dual = Quat::from_xyzw(half_t.x, half_t.y, half_t.z, 0.0) * rotation;

        Self {
            real: rotation,
            dual,
        }
    }

    /// Returns the translation encoded by this dual quaternion,
    /// the vector part of `2 · dual ⊗ conjugate(real)`.
    #[inline]
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        let t = (self.dual * self.real.conjugate()) * 2.0;
        Vec3::new(t.x, t.y, t.z)
    }

    /// Splits the dual quaternion back into its rotation and translation.
    #[inline]
    #[must_use]
    pub fn to_rigid_transform(&self) -> (Quat, Vec3) {
        (self.real, self.translation())
    }

    /// Returns `true` if the real part has unit length within glam's tolerance.
    #[inline]
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.real.is_normalized()
    }

    /// Shader layout: two `float4` vectors, real part first.
    #[inline]
    #[must_use]
    pub fn to_gpu(&self) -> [[f32; 4]; 2] {
        [self.real.to_array(), self.dual.to_array()]
    }
}

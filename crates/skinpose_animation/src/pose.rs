use glam::{Mat4, Quat, Vec3};

use skinpose_core::{PoseError, Result, UnitDualQuaternion};

/// Tolerance on `|rotation| - 1` accepted when a clip is built.
pub const UNIT_EPSILON: f32 = 1e-3;

/// Rotation and translation of one bone at one instant. No scale or shear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidPose {
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Default for RigidPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidPose {
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    #[must_use]
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Rotate first, then translate.
    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    #[inline]
    #[must_use]
    pub fn to_dual_quaternion(&self) -> UnitDualQuaternion {
        UnitDualQuaternion::from_rigid_transform(self.rotation, self.translation)
    }

    /// Returns `true` if the rotation magnitude is within [`UNIT_EPSILON`] of 1.
    #[inline]
    #[must_use]
    pub fn has_unit_rotation(&self) -> bool {
        (self.rotation.length() - 1.0).abs() <= UNIT_EPSILON
    }
}

/// One sampled instant of a clip: one [`RigidPose`] per bone, ordered by
/// bone index. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePose {
    bones: Box<[RigidPose]>,
}

impl FramePose {
    #[must_use]
    pub fn new(bones: Vec<RigidPose>) -> Self {
        Self {
            bones: bones.into_boxed_slice(),
        }
    }

    /// Builds a frame from parallel rotation and translation arrays, the
    /// layout animation runtimes usually export.
    ///
    /// Rejects slices of different lengths.
    pub fn from_parts(rotations: &[Quat], translations: &[Vec3]) -> Result<Self> {
        if rotations.len() != translations.len() {
            return Err(PoseError::PartsLengthMismatch {
                rotations: rotations.len(),
                translations: translations.len(),
            });
        }
        Ok(rotations
            .iter()
            .zip(translations)
            .map(|(&r, &t)| RigidPose::new(r, t))
            .collect())
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[RigidPose] {
        &self.bones
    }

    #[inline]
    #[must_use]
    pub fn bone(&self, index: usize) -> Option<&RigidPose> {
        self.bones.get(index)
    }
}

impl FromIterator<RigidPose> for FramePose {
    fn from_iter<I: IntoIterator<Item = RigidPose>>(iter: I) -> Self {
        Self {
            bones: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn matrix_rotates_then_translates() {
        let pose = RigidPose::new(Quat::from_rotation_z(FRAC_PI_2), Vec3::new(10.0, 0.0, 0.0));
        let p = pose.to_matrix().transform_point3(Vec3::X);
        // X rotated onto Y, then shifted along X
        assert!((p - Vec3::new(10.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn unit_rotation_check_uses_tolerance() {
        assert!(RigidPose::IDENTITY.has_unit_rotation());
        let almost = RigidPose::new(Quat::from_xyzw(0.0, 0.0, 0.0, 1.0005), Vec3::ZERO);
        assert!(almost.has_unit_rotation());
        let scaled = RigidPose::new(Quat::from_xyzw(0.0, 0.0, 0.0, 2.0), Vec3::ZERO);
        assert!(!scaled.has_unit_rotation());
    }

    #[test]
    fn frame_from_parts_keeps_bone_order() {
        let frame = FramePose::from_parts(
            &[Quat::IDENTITY, Quat::from_rotation_x(FRAC_PI_2)],
            &[Vec3::X, Vec3::Y],
        )
        .unwrap();
        assert_eq!(frame.bone_count(), 2);
        assert_eq!(frame.bone(0).map(|b| b.translation), Some(Vec3::X));
        assert_eq!(frame.bone(1).map(|b| b.translation), Some(Vec3::Y));
        assert!(frame.bone(2).is_none());
    }

    #[test]
    fn frame_from_parts_rejects_length_mismatch() {
        let err = FramePose::from_parts(&[Quat::IDENTITY; 3], &[Vec3::ZERO; 2]).unwrap_err();
        assert_eq!(
            err,
            PoseError::PartsLengthMismatch {
                rotations: 3,
                translations: 2
            }
        );
    }
}

use glam::Mat4;

use skinpose_core::UnitDualQuaternion;

use crate::clip::AnimationClip;
use crate::pose::FramePose;

/// Turns a clip and a playback time into per-bone skinning palettes.
///
/// Every call looks the frame up exactly once, so all bones written by one
/// call come from the same frame. Output slices must hold at least
/// `clip.bone_count()` entries; only that many are written and any excess is
/// left untouched.
#[derive(Debug, Clone, Copy)]
pub struct PoseEvaluator<'a> {
    clip: &'a AnimationClip,
}

impl<'a> PoseEvaluator<'a> {
    #[must_use]
    pub fn new(clip: &'a AnimationClip) -> Self {
        Self { clip }
    }

    #[inline]
    #[must_use]
    pub fn clip(&self) -> &'a AnimationClip {
        self.clip
    }

    /// Writes one affine matrix per bone (rotation, then translation) for
    /// linear-blend skinning. Returns the number of matrices written.
    pub fn emit_bone_matrices(&self, time: f32, out: &mut [Mat4]) -> usize {
        let frame = self.clip.frame_pose_at(time);
        write_matrices(frame, self.check_capacity(out.len(), "bone matrix"), out)
    }

    /// Writes one unit dual quaternion per bone for dual-quaternion skinning.
    /// Returns the number of dual quaternions written.
    pub fn emit_bone_dual_quaternions(&self, time: f32, out: &mut [UnitDualQuaternion]) -> usize {
        let frame = self.clip.frame_pose_at(time);
        write_dual_quaternions(frame, self.check_capacity(out.len(), "dual quaternion"), out)
    }

    /// Fills both palettes from a single frame lookup.
    pub fn emit_skinning_palette(
        &self,
        time: f32,
        matrices: &mut [Mat4],
        dual_quaternions: &mut [UnitDualQuaternion],
    ) -> usize {
        let bone_count = self.check_capacity(matrices.len(), "bone matrix");
        self.check_capacity(dual_quaternions.len(), "dual quaternion");

        let frame = self.clip.frame_pose_at(time);
        write_matrices(frame, bone_count, matrices);
        write_dual_quaternions(frame, bone_count, dual_quaternions)
    }

    fn check_capacity(&self, capacity: usize, what: &str) -> usize {
        let bone_count = self.clip.bone_count();
        assert!(
            capacity >= bone_count,
            "{what} buffer holds {capacity} entries, skeleton needs {bone_count}"
        );
        bone_count
    }
}

fn write_matrices(frame: &FramePose, bone_count: usize, out: &mut [Mat4]) -> usize {
    for (dst, pose) in out[..bone_count].iter_mut().zip(frame.bones()) {
        *dst = pose.to_matrix();
    }
    bone_count
}

fn write_dual_quaternions(
    frame: &FramePose,
    bone_count: usize,
    out: &mut [UnitDualQuaternion],
) -> usize {
    for (dst, pose) in out[..bone_count].iter_mut().zip(frame.bones()) {
        *dst = pose.to_dual_quaternion();
    }
    bone_count
}

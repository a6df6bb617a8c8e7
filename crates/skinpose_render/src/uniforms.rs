//! Per-Draw-Call Uniform Block
//!
//! CPU mirror of the constant buffer bound for every skinned draw call:
//! the instance world matrix followed by both skinning palettes, each sized
//! to the shader's fixed bone array length ([`MAX_BONE_COUNT`]).
//!
//! Matrices are stored column-major with column vectors (glam's layout),
//! which is byte-identical to a row-major, row-vector matrix. The block is
//! `Pod`, so [`PerDrawCallUniforms::as_bytes`] can be copied straight into a
//! mapped GPU buffer.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use skinpose_animation::{AnimationClip, PlaybackState, PoseEvaluator};
use skinpose_core::{MAX_BONE_COUNT, UnitDualQuaternion};

use crate::skinning::SkinningMode;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PerDrawCallUniforms {
    pub world: Mat4,
    pub bone_matrices: [Mat4; MAX_BONE_COUNT],
    pub bone_dual_quaternions: [UnitDualQuaternion; MAX_BONE_COUNT],
}

impl Default for PerDrawCallUniforms {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            bone_matrices: [Mat4::IDENTITY; MAX_BONE_COUNT],
            bone_dual_quaternions: [UnitDualQuaternion::IDENTITY; MAX_BONE_COUNT],
        }
    }
}

impl PerDrawCallUniforms {
    /// Size of the block in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Fills the block for one instance: its world matrix and both palettes
    /// sampled at its current playback time.
    ///
    /// Returns the number of bones written. Entries past the clip's bone
    /// count keep their previous contents.
    pub fn write(&mut self, clip: &AnimationClip, playback: &PlaybackState) -> usize {
        self.world = playback.world;
        PoseEvaluator::new(clip).emit_skinning_palette(
            playback.time,
            &mut self.bone_matrices,
            &mut self.bone_dual_quaternions,
        )
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Bytes of the palette the `mode` shader variant reads, limited to the
    /// first `bone_count` entries.
    #[must_use]
    pub fn palette_bytes(&self, mode: SkinningMode, bone_count: usize) -> &[u8] {
        let bone_count = bone_count.min(MAX_BONE_COUNT);
        if mode.uses_dual_quaternions() {
            bytemuck::cast_slice(&self.bone_dual_quaternions[..bone_count])
        } else {
            bytemuck::cast_slice(&self.bone_matrices[..bone_count])
        }
    }
}

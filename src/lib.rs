//! # Skinpose
//!
//! Samples a baked skeletal animation clip at an arbitrary playback time and
//! produces, per bone, both an affine matrix (linear-blend skinning) and a
//! unit dual quaternion (dual-quaternion skinning).
//!
//! ```rust,ignore
//! use skinpose::prelude::*;
//!
//! let clip = AnimationClip::new("walk", SkeletonLayout::default(), 2.0, frames)?;
//! let mut state = PlaybackState::new(Mat4::IDENTITY, 0.0, clip.duration());
//!
//! // Per tick
//! state.advance(dt);
//!
//! // Per draw
//! let mut matrices = [Mat4::IDENTITY; MAX_BONE_COUNT];
//! let mut dual_quats = [UnitDualQuaternion::IDENTITY; MAX_BONE_COUNT];
//! PoseEvaluator::new(&clip).emit_skinning_palette(state.time, &mut matrices, &mut dual_quats);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub use skinpose_animation as animation;
pub use skinpose_core as math;
pub use skinpose_render as render;

pub use skinpose_animation::{
    AnimationClip, FramePose, FrameSampler, PlaybackState, PoseEvaluator, RigidPose,
};
pub use skinpose_core::{
    BONE_COUNT, MAX_BONE_COUNT, PoseError, Result, SkeletonLayout, UnitDualQuaternion,
};
pub use skinpose_render::{
    CharacterAsset, CharacterInstance, Crowd, CrowdLayout, PerDrawCallUniforms, SkinningMode,
};

pub mod prelude {
    pub use crate::animation::{AnimationClip, FramePose, PlaybackState, PoseEvaluator, RigidPose};
    pub use crate::math::{MAX_BONE_COUNT, SkeletonLayout, UnitDualQuaternion};
    pub use crate::render::{CharacterAsset, Crowd, CrowdLayout, PerDrawCallUniforms, SkinningMode};
    pub use glam::{Mat4, Quat, Vec3};
}

//! # Skinpose Animation
//!
//! Baked skeletal clips and the per-frame pose queries feeding GPU skinning.
//!
//! - [`AnimationClip`]: immutable frames plus duration, sampled periodically
//! - [`FrameSampler`]: time to frame index mapping
//! - [`PoseEvaluator`]: bone matrix and dual-quaternion palettes for a time
//! - [`PlaybackState`]: per-instance clock advanced by the frame loop

pub mod clip;
pub mod evaluator;
pub mod playback;
pub mod pose;
pub mod sampler;

pub use clip::AnimationClip;
pub use evaluator::PoseEvaluator;
pub use playback::PlaybackState;
pub use pose::{FramePose, RigidPose, UNIT_EPSILON};
pub use sampler::FrameSampler;

//! Procedural wave clip standing in for an asset loaded from disk.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use skinpose::{AnimationClip, FramePose, RigidPose, SkeletonLayout};

/// Builds a `frame_count`-frame clip in which every bone sways about Z with
/// a per-bone phase offset, bones stacked along Y.
pub fn wave_clip(
    layout: SkeletonLayout,
    frame_count: usize,
    time_step: f32,
) -> skinpose::Result<AnimationClip> {
    let frames = (0..frame_count)
        .map(|frame| {
            let t = (frame as f32 / frame_count as f32) * TAU;
            (0..layout.bone_count())
                .map(|bone| {
                    let phase = bone as f32 * 0.5;
                    let angle = (t + phase).sin() * 0.3;
                    RigidPose::new(
                        Quat::from_rotation_z(angle),
                        Vec3::new(0.0, bone as f32 * 1.5, 0.0),
                    )
                })
                .collect::<FramePose>()
        })
        .collect();

    AnimationClip::from_time_step("wave", layout, time_step, frames)
}

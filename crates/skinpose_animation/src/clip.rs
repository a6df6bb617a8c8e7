use log::debug;

use skinpose_core::{PoseError, Result, SkeletonLayout};

use crate::pose::FramePose;
use crate::sampler::FrameSampler;

/// A baked skeletal animation: evenly spaced frames covering `duration`
/// seconds, played back periodically.
///
/// Built once at load time and read-only afterwards, so a single clip can be
/// shared (typically behind an `Arc`) by any number of character instances
/// and threads.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    layout: SkeletonLayout,
    sampler: FrameSampler,
    frames: Vec<FramePose>,
}

impl AnimationClip {
    /// Builds a clip from its frames and total duration.
    ///
    /// Rejects a non-positive or non-finite duration, an empty frame list,
    /// frames whose length differs from `layout.bone_count()` and bone
    /// rotations that are not unit quaternions.
    pub fn new(
        name: impl Into<String>,
        layout: SkeletonLayout,
        duration: f32,
        frames: Vec<FramePose>,
    ) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(PoseError::InvalidDuration(duration));
        }
        layout.validate()?;
        validate_frames(&layout, &frames)?;

        let name = name.into();
        debug!(
            "AnimationClip '{}': {} frames, {} bones, {:.3}s",
            name,
            frames.len(),
            layout.bone_count(),
            duration
        );

        Ok(Self {
            name,
            layout,
            sampler: FrameSampler::new(duration, frames.len()),
            frames,
        })
    }

    /// Builds a clip whose frames are `time_step` seconds apart, so
    /// `duration = time_step * frames.len()`.
    pub fn from_time_step(
        name: impl Into<String>,
        layout: SkeletonLayout,
        time_step: f32,
        frames: Vec<FramePose>,
    ) -> Result<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(PoseError::InvalidTimeStep(time_step));
        }
        if frames.is_empty() {
            return Err(PoseError::EmptyClip);
        }
        let duration = time_step * frames.len() as f32;
        Self::new(name, layout, duration, frames)
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.sampler.duration()
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.layout.bone_count()
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> SkeletonLayout {
        self.layout
    }

    /// Seconds covered by each frame.
    #[inline]
    #[must_use]
    pub fn time_step(&self) -> f32 {
        self.duration() / self.frames.len() as f32
    }

    #[inline]
    #[must_use]
    pub fn sampler(&self) -> FrameSampler {
        self.sampler
    }

    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[FramePose] {
        &self.frames
    }

    /// Index of the frame covering `time`. See [`FrameSampler::frame_index`].
    #[inline]
    #[must_use]
    pub fn frame_index_at(&self, time: f32) -> usize {
        self.sampler.frame_index(time)
    }

    /// The frame covering `time`, with the clip treated as periodic.
    #[inline]
    #[must_use]
    pub fn frame_pose_at(&self, time: f32) -> &FramePose {
        &self.frames[self.sampler.frame_index(time)]
    }
}

fn validate_frames(layout: &SkeletonLayout, frames: &[FramePose]) -> Result<()> {
    if frames.is_empty() {
        return Err(PoseError::EmptyClip);
    }

    let expected = layout.bone_count();
    for (frame_index, frame) in frames.iter().enumerate() {
        if frame.bone_count() != expected {
            return Err(PoseError::BoneCountMismatch {
                frame: frame_index,
                expected,
                found: frame.bone_count(),
            });
        }

        if let Some((bone, pose)) = frame
            .bones()
            .iter()
            .enumerate()
            .find(|(_, pose)| !pose.has_unit_rotation())
        {
            return Err(PoseError::NonUnitRotation {
                frame: frame_index,
                bone,
                length: pose.rotation.length(),
            });
        }
    }
    Ok(())
}

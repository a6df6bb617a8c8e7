//! Skeleton Layout Configuration
//!
//! The bone count is a cross-cutting constant: every clip, every bone
//! matrix palette and every dual-quaternion palette must agree on it, and the
//! skinning shaders declare fixed-size arrays that must be large enough to
//! hold it. [`SkeletonLayout`] carries both numbers and is validated once,
//! when a clip is built.
//!
//! ```rust,ignore
//! use skinpose_core::layout::SkeletonLayout;
//!
//! // Default: the character rig shipped with the crowd demo
//! let layout = SkeletonLayout::default();
//!
//! // A smaller rig rendered with the same shaders
//! let layout = SkeletonLayout::new(4)?;
//! ```

use crate::errors::{PoseError, Result};

/// Bones in the default character rig.
pub const BONE_COUNT: usize = 22;

/// Length of the bone arrays declared by the skinning shaders.
pub const MAX_BONE_COUNT: usize = 64;

const _: () = assert!(BONE_COUNT <= MAX_BONE_COUNT);

/// Bone count of a skeleton and the shader capacity it is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonLayout {
    bone_count: usize,
    max_bone_count: usize,
}

impl Default for SkeletonLayout {
    #[inline]
    fn default() -> Self {
        Self {
            bone_count: BONE_COUNT,
            max_bone_count: MAX_BONE_COUNT,
        }
    }
}

impl SkeletonLayout {
    /// Creates a layout for `bone_count` bones rendered with the default
    /// shader capacity ([`MAX_BONE_COUNT`]).
    pub fn new(bone_count: usize) -> Result<Self> {
        Self::with_capacity(bone_count, MAX_BONE_COUNT)
    }

    /// Creates a layout for a shader whose bone arrays hold `max_bone_count`
    /// entries. The capacity cannot exceed [`MAX_BONE_COUNT`], the size of the
    /// per-draw palettes the layout is packed into.
    pub fn with_capacity(bone_count: usize, max_bone_count: usize) -> Result<Self> {
        let layout = Self {
            bone_count,
            max_bone_count,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Checks that the skeleton is non-empty, fits the shader arrays, and that
    /// those arrays fit the per-draw palettes.
    pub fn validate(&self) -> Result<()> {
        if self.bone_count == 0
            || self.bone_count > self.max_bone_count
            || self.max_bone_count > MAX_BONE_COUNT
        {
            return Err(PoseError::InvalidLayout {
                bone_count: self.bone_count,
                max_bone_count: self.max_bone_count,
            });
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bone_count
    }

    #[inline]
    #[must_use]
    pub fn max_bone_count(&self) -> usize {
        self.max_bone_count
    }
}

//! Error Types
//!
//! All load-time failures of the pose pipeline are reported through
//! [`PoseError`]. Hot-path precondition violations (an undersized output
//! slice, a NaN sample time) are programmer errors and panic instead.
//!
//! ```rust,ignore
//! use skinpose_core::errors::{PoseError, Result};
//!
//! fn build() -> Result<()> {
//!     // Clip construction returns Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for clip and layout construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoseError {
    // ========================================================================
    // Clip Errors
    // ========================================================================
    /// Clip duration is not a finite, strictly positive number of seconds.
    #[error("Invalid clip duration: {0} (must be finite and > 0)")]
    InvalidDuration(f32),

    /// Per-frame time step is not a finite, strictly positive number of seconds.
    #[error("Invalid clip time step: {0} (must be finite and > 0)")]
    InvalidTimeStep(f32),

    /// The clip contains no frames.
    #[error("Animation clip has no frames")]
    EmptyClip,

    /// A frame does not carry exactly one pose per bone.
    #[error("Frame {frame} has {found} bone poses, expected {expected}")]
    BoneCountMismatch {
        /// Index of the offending frame
        frame: usize,
        /// Bone count required by the skeleton layout
        expected: usize,
        /// Number of poses the frame actually carries
        found: usize,
    },

    /// Parallel rotation and translation arrays of a frame differ in length.
    #[error("Frame has {rotations} rotations but {translations} translations")]
    PartsLengthMismatch {
        /// Number of bone rotations supplied
        rotations: usize,
        /// Number of bone translations supplied
        translations: usize,
    },

    /// A bone rotation is not a unit quaternion.
    #[error("Frame {frame}, bone {bone}: rotation length {length} is not unit")]
    NonUnitRotation {
        /// Index of the offending frame
        frame: usize,
        /// Index of the offending bone
        bone: usize,
        /// Measured quaternion magnitude
        length: f32,
    },

    // ========================================================================
    // Layout Errors
    // ========================================================================
    /// The skeleton does not fit the shader's bone arrays, or those arrays
    /// are larger than the per-draw palettes.
    #[error("Invalid skeleton layout: {bone_count} bones (shader capacity {max_bone_count})")]
    InvalidLayout {
        /// Bones per frame
        bone_count: usize,
        /// Capacity of the shader-side bone arrays
        max_bone_count: usize,
    },
}

/// Alias for `Result<T, PoseError>`.
pub type Result<T> = std::result::Result<T, PoseError>;

//! # Skinpose Core
//!
//! Foundational types shared by the skinpose crates:
//!
//! - [`dual_quat`]: unit dual quaternions and the rigid-transform conversion
//! - [`layout`]: skeleton bone count and shader capacity configuration
//! - [`errors`]: error type and `Result` alias

pub mod dual_quat;
pub mod errors;
pub mod layout;

pub use dual_quat::UnitDualQuaternion;
pub use errors::{PoseError, Result};
pub use layout::{BONE_COUNT, MAX_BONE_COUNT, SkeletonLayout};

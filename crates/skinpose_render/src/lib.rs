//! # Skinpose Render
//!
//! Renderer-facing data for skinned characters. Nothing here touches a GPU
//! API: the output is plain data that a renderer copies into its own buffers.
//!
//! - [`CharacterAsset`] / [`CharacterInstance`]: shared clip, per-instance playback
//! - [`Crowd`]: grid of instances advanced together
//! - [`PerDrawCallUniforms`]: world matrix plus both skinning palettes
//! - [`SkinningMode`]: which shader variant consumes the palettes

pub mod character;
pub mod crowd;
pub mod skinning;
pub mod uniforms;

pub use character::{CharacterAsset, CharacterInstance};
pub use crowd::{Crowd, CrowdLayout};
pub use skinning::SkinningMode;
pub use uniforms::PerDrawCallUniforms;

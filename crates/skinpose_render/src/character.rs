use std::sync::Arc;

use glam::Mat4;

use skinpose_animation::{AnimationClip, PlaybackState};

use crate::uniforms::PerDrawCallUniforms;

/// Shared, load-once character data. Holds the clip every instance samples.
#[derive(Debug, Clone)]
pub struct CharacterAsset {
    pub name: String,
    clip: Arc<AnimationClip>,
}

impl CharacterAsset {
    #[must_use]
    pub fn new(name: impl Into<String>, clip: Arc<AnimationClip>) -> Self {
        Self {
            name: name.into(),
            clip,
        }
    }

    #[inline]
    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[inline]
    #[must_use]
    pub fn animation_duration(&self) -> f32 {
        self.clip.duration()
    }

    /// Creates an instance of this character placed at `world`, starting
    /// playback at `start_time`.
    #[must_use]
    pub fn instantiate(&self, world: Mat4, start_time: f32) -> CharacterInstance {
        CharacterInstance {
            playback: PlaybackState::new(world, start_time, self.animation_duration()),
        }
    }
}

/// One placed, independently animated copy of a [`CharacterAsset`].
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterInstance {
    pub playback: PlaybackState,
}

impl CharacterInstance {
    #[inline]
    pub fn update(&mut self, dt: f32) {
        self.playback.advance(dt);
    }

    #[inline]
    #[must_use]
    pub fn animation_time(&self) -> f32 {
        self.playback.time
    }

    #[inline]
    #[must_use]
    pub fn world(&self) -> Mat4 {
        self.playback.world
    }

    /// Fills a per-draw-call block for this instance.
    pub fn write_uniforms(&self, asset: &CharacterAsset, out: &mut PerDrawCallUniforms) -> usize {
        out.write(asset.clip(), &self.playback)
    }
}

//! Crowd of Animated Characters
//!
//! A [`Crowd`] owns one [`CharacterAsset`] and the list of instances drawn
//! with it. Instances are laid out on a square grid, each with its own
//! random phase into the clip so the crowd does not move in lockstep.
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use skinpose_render::{Crowd, CrowdLayout, PerDrawCallUniforms};
//!
//! let mut crowd = Crowd::new(asset, CrowdLayout::default());
//! crowd.spawn_grid(25, &mut rand::rngs::StdRng::seed_from_u64(7));
//!
//! // Per frame:
//! crowd.tick(dt);
//! let mut block = PerDrawCallUniforms::default();
//! for i in 0..crowd.len() {
//!     crowd.write_draw_call(i, &mut block);
//!     // upload block.as_bytes(), draw with the selected shader variant
//! }
//! ```

use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec3};
use log::{info, warn};
use rand::Rng;

use crate::character::{CharacterAsset, CharacterInstance};
use crate::uniforms::PerDrawCallUniforms;

/// Grid placement and playback parameters for a crowd.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrowdLayout {
    /// Distance between neighbouring grid cells.
    pub spacing: f32,
    /// Per-column offset of the first cell, so the grid is roughly centred.
    pub start_offset: f32,
    /// Height of every instance above the ground plane.
    pub height: f32,
    /// Rotation about +Y applied to every instance, in radians.
    pub yaw: f32,
    /// Upper bound on the number of instances.
    pub max_instances: usize,
    /// Playback rate given to new instances.
    pub playback_rate: f32,
}

impl Default for CrowdLayout {
    fn default() -> Self {
        Self {
            spacing: 35.5,
            start_offset: 35.25,
            height: 4.5,
            yaw: -PI * 0.75,
            max_instances: 100,
            playback_rate: 1.0,
        }
    }
}

impl CrowdLayout {
    /// World transform of instance `index` in a grid of `count` instances.
    ///
    /// The grid has `floor(sqrt(count))` columns; leftover instances start
    /// extra rows.
    #[must_use]
    pub fn grid_transform(&self, index: usize, count: usize) -> Mat4 {
        let side = ((count as f32).sqrt() as usize).max(1);
        let ix = index % side;
        let iz = index / side;
        let start = -(side as f32) * self.start_offset;

        let position = Vec3::new(
            start + ix as f32 * self.spacing,
            self.height,
            start + iz as f32 * self.spacing,
        );
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.yaw), position)
    }
}

#[derive(Debug, Clone)]
pub struct Crowd {
    asset: CharacterAsset,
    layout: CrowdLayout,
    instances: Vec<CharacterInstance>,
}

impl Crowd {
    #[must_use]
    pub fn new(asset: CharacterAsset, layout: CrowdLayout) -> Self {
        Self {
            asset,
            layout,
            instances: Vec::new(),
        }
    }

    /// Replaces all instances with `count` new ones on the grid.
    ///
    /// `count` is clamped to `1..=layout.max_instances`. Each instance
    /// starts at a uniformly random time in `[0, duration)`. Returns the
    /// number of instances spawned.
    pub fn spawn_grid<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let max = self.layout.max_instances.max(1);
        let clamped = count.clamp(1, max);
        if clamped != count {
            warn!("Crowd: requested {count} instances, clamped to {clamped}");
        }

        let duration = self.asset.animation_duration();
        self.instances.clear();
        self.instances.extend((0..clamped).map(|i| {
            let world = self.layout.grid_transform(i, clamped);
            let start_time = duration * rng.random::<f32>();
            let mut instance = self.asset.instantiate(world, start_time);
            instance.playback.rate = self.layout.playback_rate;
            instance
        }));

        info!("Crowd: spawned {clamped} instances of '{}'", self.asset.name);
        clamped
    }

    /// Advances every instance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for instance in &mut self.instances {
            instance.update(dt);
        }
    }

    /// Fills the per-draw-call block for instance `index`. Returns the number
    /// of bones written, or `None` if there is no such instance.
    pub fn write_draw_call(&self, index: usize, out: &mut PerDrawCallUniforms) -> Option<usize> {
        let instance = self.instances.get(index)?;
        Some(instance.write_uniforms(&self.asset, out))
    }

    #[inline]
    #[must_use]
    pub fn asset(&self) -> &CharacterAsset {
        &self.asset
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &CrowdLayout {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub fn instances(&self) -> &[CharacterInstance] {
        &self.instances
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterInstance> {
        self.instances.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

use glam::Mat4;
use log::trace;

/// Per-instance playback clock and placement.
///
/// Owned by exactly one character instance and advanced once per tick by the
/// frame loop. The clip itself is shared; only this state differs between
/// instances.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Current playback time in seconds.
    pub time: f32,
    /// Playback speed multiplier applied to every `advance`.
    pub rate: f32,
    /// Instance placement in world space.
    pub world: Mat4,
    duration: f32,
}

impl PlaybackState {
    #[must_use]
    pub fn new(world: Mat4, start_time: f32, duration: f32) -> Self {
        Self {
            time: start_time,
            rate: 1.0,
            world,
            duration,
        }
    }

    #[must_use]
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Advances the clock by `dt` seconds scaled by `rate`.
    ///
    /// Once the time runs past the clip duration it restarts at zero. This is
    /// a coarse reset; sampling is periodic anyway, so any finite time would
    /// still select a valid frame.
    pub fn advance(&mut self, dt: f32) {
        self.time += self.rate * dt;

        if self.time > self.duration {
            trace!("playback wrapped at {:.3}s (duration {:.3}s)", self.time, self.duration);
            self.time = 0.0;
        }
    }
}

/// Maps a playback time to a frame index, treating the clip as periodic
/// with period `duration`.
///
/// The fractional part is taken by truncating toward zero and then dropping
/// the sign. For non-negative times this is an ordinary wraparound; for
/// negative times it mirrors around zero (`-2.0` in an `8.0` second clip
/// lands on the same frame as `+2.0`, not on the last quarter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSampler {
    duration: f32,
    frame_count: usize,
}

impl FrameSampler {
    /// Both arguments are validated by the owning clip: `duration` finite
    /// and positive, `frame_count` non-zero.
    #[must_use]
    pub(crate) fn new(duration: f32, frame_count: usize) -> Self {
        debug_assert!(duration.is_finite() && duration > 0.0);
        debug_assert!(frame_count > 0);
        Self {
            duration,
            frame_count,
        }
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Position of `time` within the period, in `[0, 1)`.
    ///
    /// Infinite times collapse to `0.0`. Panics on NaN.
    #[inline]
    #[must_use]
    pub fn phase(&self, time: f32) -> f32 {
        assert!(!time.is_nan(), "animation time must not be NaN");

        let percent = time / self.duration;
        if percent.is_infinite() {
            return 0.0;
        }
        (percent - percent.trunc()).abs()
    }

    /// Index of the frame covering `time`, always in `[0, frame_count)`.
    #[inline]
    #[must_use]
    pub fn frame_index(&self, time: f32) -> usize {
        let phase = self.phase(time);
        debug_assert!(phase < 1.0);

        // `count * phase` can round up to `count` for phases just below 1.
        ((self.frame_count as f32 * phase) as usize).min(self.frame_count - 1)
    }
}

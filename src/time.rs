//! Frame clock: maps display frame indices to the animation time `t`.
//!
//! `t` is the continuous frame index times a fixed morphing speed. The
//! external driver owns the display loop and may restart its own counter
//! when it loops (a 360-frame cycle that repeats, for instance). The clock
//! folds such restarts into a continuous index so `t` never decreases and
//! the particle simulation never sees time run backwards.
//!
//! # Example
//!
//! ```ignore
//! use nyth_morph::time::FrameClock;
//!
//! let mut clock = FrameClock::new(0.02);
//! assert_eq!(clock.resolve(0), 0.0);
//! clock.resolve(359);
//! // Driver looped: frame 0 continues as frame 360.
//! let t = clock.resolve(0);
//! assert!((t - 7.2).abs() < 1e-4);
//! ```

/// Default morphing speed (time units per frame).
pub const DEFAULT_MORPH_SPEED: f32 = 0.02;

/// Monotonic frame-to-time mapping.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Time units advanced per frame.
    speed: f32,
    /// Offset added to raw driver indices after each detected loop.
    base: u64,
    /// Last raw index the driver asked for.
    last_raw: Option<u64>,
    /// Continuous index of the last resolved frame.
    frame: u64,
    /// Number of frames resolved so far.
    ticks: u64,
}

impl FrameClock {
    /// Create a clock advancing `speed` time units per frame.
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            base: 0,
            last_raw: None,
            frame: 0,
            ticks: 0,
        }
    }

    /// Resolve a driver frame index to `t`, recording it as the current frame.
    ///
    /// A raw index lower than the previous one is treated as the driver
    /// looping back: the continuous index carries on from where it was.
    /// Repeating the same index yields the same `t`.
    pub fn resolve(&mut self, frame_index: u64) -> f32 {
        if let Some(last) = self.last_raw {
            if frame_index < last {
                self.base = self.base.saturating_add(last).saturating_add(1);
                tracing::debug!(
                    from = last,
                    to = frame_index,
                    continuous = self.base.saturating_add(frame_index),
                    "driver frame counter looped"
                );
            }
        }
        self.last_raw = Some(frame_index);
        self.frame = self.base.saturating_add(frame_index);
        self.ticks += 1;
        self.time()
    }

    /// The raw index that follows the last resolved one (0 before any frame).
    #[inline]
    pub fn next_index(&self) -> u64 {
        self.last_raw.map_or(0, |last| last.saturating_add(1))
    }

    /// `t` for an arbitrary continuous frame index.
    #[inline]
    pub fn time_at(&self, frame: u64) -> f32 {
        frame as f32 * self.speed
    }

    /// `t` of the last resolved frame (0 before any frame).
    #[inline]
    pub fn time(&self) -> f32 {
        self.time_at(self.frame)
    }

    /// Continuous index of the last resolved frame.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frames resolved so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Time units per frame.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MORPH_SPEED)
    }
}

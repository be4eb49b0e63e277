use std::time::Instant;

/// Frame clock - turns wall-clock timestamps into per-frame elapsed seconds
///
/// The render loop owns this and hands the delta to whatever it updates.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frames: u64,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frames: 0,
        }
    }

    /// Seconds since the previous tick; advances the clock.
    /// Never negative.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as [`FrameClock::tick`] with an explicit timestamp.
    /// A timestamp earlier than the last tick yields zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = self.last_tick.max(now);
        self.frames += 1;
        delta
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Restart timing from now, e.g. after the window regains focus
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

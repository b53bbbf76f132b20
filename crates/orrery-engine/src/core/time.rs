/// Variable-step frame clock.
/// Motion scales by the real elapsed delta; this only sanitizes it.
pub struct FrameClock {
    /// Largest delta passed through per frame.
    max_dt: f32,
    /// Total sanitized time in seconds.
    elapsed: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Accept a raw frame delta. Returns the delta to feed the motion model:
    /// NaN and negative deltas become zero, long stalls are capped.
    pub fn tick(&mut self, raw_dt: f32) -> f32 {
        let dt = if raw_dt.is_finite() && raw_dt > 0.0 {
            raw_dt.min(self.max_dt)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.frames += 1;
        dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

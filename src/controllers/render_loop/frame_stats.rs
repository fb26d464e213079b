use std::time::{Duration, Instant};

/// Minimum time between two frame-rate samples.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(50);

/// Counts presented frames and turns them into a frames-per-second figure
/// roughly twenty times a second.
#[derive(Debug, Clone)]
pub struct FrameStats {
    last_sample: Instant,
    frames_since_sample: u32,
    fps: Option<f64>,
}

impl FrameStats {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            last_sample: now,
            frames_since_sample: 0,
            fps: None,
        }
    }

    /// Records one frame. Returns the new rate when a sample was taken.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames_since_sample += 1;

        let elapsed = now.saturating_duration_since(self.last_sample);
        if elapsed < SAMPLE_INTERVAL {
            return None;
        }

        let fps = f64::from(self.frames_since_sample) / elapsed.as_secs_f64();
        self.fps = Some(fps);
        self.last_sample = now;
        self.frames_since_sample = 0;

        Some(fps)
    }

    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }
}

use std::time::Instant;

use super::timer::Throttled;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Minimal frame clock - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a one second window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: f32,
    window: Throttled,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
            window: Throttled::new(FPS_UPDATE_INTERVAL),
        }
    }

    /// Record one frame; returns the fresh average when a window closes
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if !self.window.try_tick(delta) {
            return None;
        }

        self.fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn fps_counter_reports_once_per_second() {
        let mut counter = FpsCounter::new();

        for _ in 0..59 {
            assert_eq!(counter.record(1.0 / 60.0), None);
        }
        let fps = counter.record(1.0 / 60.0 + 0.001).expect("window should close");
        assert!((fps - 60.0).abs() < 0.5);
        assert_eq!(counter.fps(), fps);
    }
}

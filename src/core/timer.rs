use std::time::{Duration, Instant};

/// Fixed rate frame limiter - hands out wall-clock deadlines at a target Hz
///
/// The event loop waits until `deadline()` before requesting the next redraw,
/// which caps the update rate without sleeping inside the render path. Each
/// consumed slot grants exactly one simulation step; redraws the platform
/// asks for on its own only re-render.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    interval: Duration,
    next_deadline: Instant,
    step_pending: bool,
}

impl FrameLimiter {
    /// Create limiter for the given frequency, with the first frame due immediately
    pub fn new(hz: f32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f32(1.0 / hz),
            next_deadline: now,
            step_pending: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant at which the next frame may start
    pub fn deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Whether the next frame is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// Consume the current slot and schedule the next one
    ///
    /// A frame that overran by more than one interval resynchronizes to `now`
    /// instead of bursting to catch up.
    pub fn advance(&mut self, now: Instant) {
        self.step_pending = true;
        self.next_deadline += self.interval;
        if self.next_deadline <= now {
            self.next_deadline = now + self.interval;
        }
    }

    /// Claim the step granted by the last `advance`, at most once
    pub fn take_step(&mut self) -> bool {
        std::mem::take(&mut self.step_pending)
    }
}

/// Throttled timer - minimum interval between fires
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    /// Create throttled timer with minimum interval
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: 0.0,
        }
    }

    /// Attempt to fire, returns true if enough time has passed
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_first_frame_is_due_immediately() {
        let start = Instant::now();
        let limiter = FrameLimiter::new(60.0, start);
        assert!(limiter.is_due(start));
    }

    #[test]
    fn limiter_spaces_frames_by_interval() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(60.0, start);
        let interval = limiter.interval();

        limiter.advance(start);
        assert_eq!(limiter.deadline(), start + interval);
        assert!(!limiter.is_due(start + interval / 2));
        assert!(limiter.is_due(start + interval));
    }

    #[test]
    fn limiter_interval_matches_rate() {
        let limiter = FrameLimiter::new(60.0, Instant::now());
        let micros = limiter.interval().as_micros();
        assert!((16_600..=16_700).contains(&micros));
    }

    #[test]
    fn limiter_resyncs_after_overrun() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(60.0, start);
        let interval = limiter.interval();

        limiter.advance(start);
        let late = start + interval * 5;
        limiter.advance(late);
        assert_eq!(limiter.deadline(), late + interval);
    }

    #[test]
    fn limiter_grants_one_step_per_slot() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(60.0, start);
        assert!(!limiter.take_step());

        limiter.advance(start);
        assert!(limiter.take_step());
        // Extra redraws before the next deadline do not step again
        assert!(!limiter.take_step());
        assert!(!limiter.take_step());

        limiter.advance(start + limiter.interval());
        limiter.advance(start + limiter.interval() * 2);
        assert!(limiter.take_step());
        assert!(!limiter.take_step());
    }

    #[test]
    fn throttled_enforces_minimum() {
        let mut timer = Throttled::new(1.0);

        assert!(!timer.try_tick(0.5));
        assert!(timer.try_tick(0.6));
        assert!(!timer.try_tick(0.1));
    }
}

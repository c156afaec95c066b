use std::time::{Duration, Instant};

/// Paces frames a fixed delay apart.
///
/// Input is handled whenever it arrives; only stepping and presenting wait
/// on the clock.
#[derive(Debug)]
pub struct FrameClock {
    delay: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            next_frame: now,
        }
    }

    /// Returns true, and schedules the following frame, when a frame is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now >= self.next_frame {
            self.next_frame = now + self.delay;
            true
        } else {
            false
        }
    }

    /// When the event loop should wake up next.
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }
}

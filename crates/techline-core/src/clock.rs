//! Fixed-rate tick pacing.
//!
//! The host reports how much wall time passed since its last frame; the
//! clock answers how many whole engine ticks that buys at the configured
//! rate. Leftover time carries over to the next frame.

use std::time::Duration;

/// Upper bound on ticks replayed for a single frame.
const MAX_CATCH_UP: u32 = 4;

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    pending: Duration,
}

impl FrameClock {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / rate_hz.max(1),
            pending: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Banks `elapsed` and returns the number of ticks now due.
    ///
    /// A long stall is not replayed in full: at most a few ticks run and the
    /// rest of the backlog is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending += elapsed;
        let mut due = 0;
        while self.pending >= self.step && due < MAX_CATCH_UP {
            self.pending -= self.step;
            due += 1;
        }
        if due == MAX_CATCH_UP && self.pending >= self.step {
            self.pending = Duration::ZERO;
        }
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.pending)
    }

    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hz_step() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.step(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = FrameClock::new(100);
        assert_eq!(clock.advance(Duration::from_millis(6)), 0);
        assert_eq!(clock.advance(Duration::from_millis(6)), 1);
        assert_eq!(clock.until_next(), Duration::from_millis(8));
    }

    #[test]
    fn runs_several_ticks_for_a_slow_frame() {
        let mut clock = FrameClock::new(100);
        assert_eq!(clock.advance(Duration::from_millis(31)), 3);
        assert_eq!(clock.until_next(), Duration::from_millis(9));
    }

    #[test]
    fn long_stall_is_capped_and_dropped() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.advance(Duration::from_secs(5)), MAX_CATCH_UP);
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn zero_rate_is_treated_as_one_hz() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.step(), Duration::from_secs(1));
    }
}

//! Fixed-delay animation clock.
//!
//! The host polls the clock from its event loop. Each time the deadline has
//! passed, [`FrameClock::tick`] hands out the next frame number and schedules
//! the following deadline one `delay` after *now*, so a slow frame pushes the
//! rest of the animation back instead of bunching frames together.
//!
//! ```ignore
//! use pulseheart::time::FrameClock;
//!
//! let mut clock = FrameClock::new(Duration::from_millis(120), Instant::now());
//!
//! // In your event loop:
//! if let Some(frame) = clock.tick(Instant::now()) {
//!     renderer.render_frame(&heart, &mut canvas, frame);
//! }
//! control_flow.wait_until(clock.deadline());
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Time between a render and the next one.
    delay: Duration,
    /// When the next frame is due.
    deadline: Instant,
    /// Frame number the next tick returns.
    frame: u64,
}

impl FrameClock {
    /// A clock whose first frame is due at `now`.
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            deadline: now,
            frame: 0,
        }
    }

    /// Returns the frame to render if the deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<u64> {
        if now < self.deadline {
            return None;
        }
        let frame = self.frame;
        self.frame += 1;
        self.deadline = now + self.delay;
        Some(frame)
    }

    /// Whether a tick at `now` would produce a frame.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Frame number the next tick returns.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(120);

    #[test]
    fn test_first_frame_is_immediate() {
        let start = Instant::now();
        let mut clock = FrameClock::new(DELAY, start);
        assert!(clock.is_due(start));
        assert_eq!(clock.tick(start), Some(0));
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_waits_for_deadline() {
        let start = Instant::now();
        let mut clock = FrameClock::new(DELAY, start);
        clock.tick(start);

        assert_eq!(clock.tick(start + Duration::from_millis(119)), None);
        assert_eq!(clock.tick(start + DELAY), Some(1));
        assert_eq!(clock.deadline(), start + DELAY * 2);
    }

    #[test]
    fn test_late_tick_reschedules_from_now() {
        let start = Instant::now();
        let mut clock = FrameClock::new(DELAY, start);
        clock.tick(start);

        let late = start + Duration::from_millis(500);
        assert_eq!(clock.tick(late), Some(1));
        assert_eq!(clock.deadline(), late + DELAY);
        // No burst of catch-up frames.
        assert_eq!(clock.tick(late + Duration::from_millis(1)), None);
    }

    #[test]
    fn test_frames_increase_monotonically() {
        let start = Instant::now();
        let mut clock = FrameClock::new(DELAY, start);
        let frames: Vec<u64> = (0..10)
            .filter_map(|i| clock.tick(start + DELAY * i))
            .collect();
        assert_eq!(frames, (0..10).collect::<Vec<u64>>());
    }
}

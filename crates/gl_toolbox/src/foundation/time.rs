//! Frame pacing

use std::time::{Duration, Instant};

/// Frame clock that caps the loop at a target rate
///
/// Call [`FrameClock::tick`] once per frame; it sleeps away whatever is left
/// of the frame budget and returns the time since the previous tick.
pub struct FrameClock {
    last_tick: Instant,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame_count: 0,
        }
    }

    /// Frame budget for a target rate. A rate of zero means uncapped.
    pub fn frame_budget(fps: u32) -> Duration {
        if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / u64::from(fps))
        }
    }

    /// Wait out the rest of the frame and return the elapsed frame time
    pub fn tick(&mut self, fps: u32) -> Duration {
        let budget = Self::frame_budget(fps);
        let spent = self.last_tick.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count += 1;
        delta
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(FrameClock::frame_budget(0), Duration::ZERO);
        assert_eq!(FrameClock::frame_budget(50), Duration::from_millis(20));
    }

    #[test]
    fn test_tick_waits_for_budget() {
        let mut clock = FrameClock::new();
        let delta = clock.tick(100);
        assert!(delta >= Duration::from_millis(10));
        assert_eq!(clock.frame_count(), 1);
    }
}
